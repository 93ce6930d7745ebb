use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use seis_eligibility::eligibility::{
    Clock, EligibilityChecker, EligibilityRequest, FixedClock, SystemClock,
};
use seis_eligibility::error::AppError;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Clock chosen at startup: pinned when a date is configured, system otherwise.
pub(crate) type SharedClock = Arc<dyn Clock>;

pub(crate) fn build_checker(today: Option<NaiveDate>) -> EligibilityChecker<SharedClock> {
    let clock: SharedClock = match today {
        Some(date) => Arc::new(FixedClock::new(date)),
        None => Arc::new(SystemClock),
    };
    EligibilityChecker::with_clock(clock)
}

pub(crate) fn load_request(path: &Path) -> Result<EligibilityRequest, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let request = serde_json::from_str(&raw)?;
    Ok(request)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
