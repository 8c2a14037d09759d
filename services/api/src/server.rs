use crate::cli::ServeArgs;
use crate::infra::{identity_verifier, AppState, InMemoryReportRepository};
use crate::routes::build_router;
use axum_prometheus::PrometheusMetricLayer;
use export_ready::config::AppConfig;
use export_ready::error::AppError;
use export_ready::telemetry;
use export_ready::workflows::reports::ReportService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

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

    let verifier = identity_verifier(&config.auth);
    if verifier.is_empty() {
        warn!("APP_AUTH_TOKENS is empty; reports API will reject every request");
    }
    let report_service = Arc::new(ReportService::new(
        Arc::new(InMemoryReportRepository::default()),
        Arc::new(verifier),
        &config.reports,
    ));

    let app = build_router(report_service, app_state, &config.server.allowed_origins)
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "export readiness service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
