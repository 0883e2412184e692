use crate::cli::ServeArgs;
use crate::infra::{allocation_source, AppState};
use crate::routes::with_site_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use examhall::allocation::AllocationDesk;
use examhall::config::AppConfig;
use examhall::error::AppError;
use examhall::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let source = Arc::new(allocation_source(config.allocation.exam_date, None));
    let desk = Arc::new(AllocationDesk::new(source, config.allocation.lookup_delay));

    let app = with_site_routes(desk)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        lookup_delay_ms = config.allocation.lookup_delay.as_millis() as u64,
        exam_date = %config.allocation.exam_date,
        "examhall site ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
