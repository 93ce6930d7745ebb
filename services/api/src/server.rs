use crate::cli::ServeArgs;
use crate::infra::{build_checker, AppState};
use crate::routes::with_eligibility_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use seis_eligibility::config::AppConfig;
use seis_eligibility::error::AppError;
use seis_eligibility::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let checker = Arc::new(build_checker(config.evaluation.today));
    if let Some(today) = config.evaluation.today {
        info!(%today, "evaluation date pinned by configuration");
    }

    let app = with_eligibility_routes(checker)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "eligibility service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
