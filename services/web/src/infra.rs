use chrono::NaiveDate;
use examhall::allocation::MockAllocationSource;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn allocation_source(exam_date: NaiveDate, seed: Option<u64>) -> MockAllocationSource {
    match seed {
        Some(seed) => MockAllocationSource::with_seed(exam_date, seed),
        None => MockAllocationSource::new(exam_date),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use examhall::allocation::{AllocationSource, FormData};

    #[test]
    fn parse_date_reports_the_raw_value() {
        assert_eq!(
            parse_date(" 2024-12-15 "),
            Ok(NaiveDate::from_ymd_opt(2024, 12, 15).expect("valid date"))
        );
        let err = parse_date("15/12/2024").expect_err("wrong format");
        assert!(err.contains("'15/12/2024'"));
    }

    #[test]
    fn seeded_sources_repeat() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 15).expect("valid date");
        let request = FormData::default();
        assert_eq!(
            allocation_source(date, Some(5)).allocate(&request),
            allocation_source(date, Some(5)).allocate(&request)
        );
    }
}
