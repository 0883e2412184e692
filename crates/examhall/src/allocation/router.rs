use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};

use super::domain::{AllocationResult, FormData, FormField};
use super::lookup::AllocationSource;
use super::presenter::ResultPresenter;
use super::service::AllocationDesk;
use crate::error::AppError;
use crate::site;

/// Blur-time check for a single input.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldCheckRequest {
    pub field: FormField,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldCheckResponse {
    pub field: FormField,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

/// Router serving the site pages plus the allocation form and JSON API.
pub fn allocation_router<S>(desk: Arc<AllocationDesk<S>>) -> Router
where
    S: AllocationSource + 'static,
{
    Router::new()
        .route("/", get(landing_handler))
        .route(
            "/allocation",
            get(form_handler::<S>).post(submit_form_handler::<S>),
        )
        .route("/api/v1/allocation/lookup", post(lookup_handler::<S>))
        .route("/api/v1/allocation/validate", post(validate_handler::<S>))
        .fallback(not_found_handler)
        .with_state(desk)
}

pub(crate) async fn landing_handler() -> Html<String> {
    Html(site::render_landing())
}

pub(crate) async fn form_handler<S>(State(desk): State<Arc<AllocationDesk<S>>>) -> Html<String>
where
    S: AllocationSource + 'static,
{
    Html(site::render_lookup_form(&desk.blank_form()))
}

pub(crate) async fn submit_form_handler<S>(
    State(desk): State<Arc<AllocationDesk<S>>>,
    Form(data): Form<FormData>,
) -> Response
where
    S: AllocationSource + 'static,
{
    let controller = desk.submit(data).await;
    match ResultPresenter::from_controller(&controller) {
        Some(presenter) => Html(site::render_lookup_result(&presenter)).into_response(),
        None => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(site::render_lookup_form(&controller)),
        )
            .into_response(),
    }
}

pub(crate) async fn lookup_handler<S>(
    State(desk): State<Arc<AllocationDesk<S>>>,
    Json(data): Json<FormData>,
) -> Result<Json<AllocationResult>, AppError>
where
    S: AllocationSource + 'static,
{
    let result = desk.lookup(data).await?;
    Ok(Json(result))
}

pub(crate) async fn validate_handler<S>(
    State(desk): State<Arc<AllocationDesk<S>>>,
    Json(request): Json<FieldCheckRequest>,
) -> Json<FieldCheckResponse>
where
    S: AllocationSource + 'static,
{
    let error = desk.check_field(request.field, &request.value);
    Json(FieldCheckResponse {
        field: request.field,
        valid: error.is_none(),
        error,
    })
}

pub(crate) async fn not_found_handler(uri: Uri) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(site::render_not_found(uri.path())),
    )
}
