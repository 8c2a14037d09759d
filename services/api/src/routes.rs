use crate::infra::AppState;
use axum::http::request::Parts;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use export_ready::identity::IdentityVerifier;
use export_ready::workflows::export_check::export_check_router;
use export_ready::workflows::reports::{report_router, ReportRepository, ReportService};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

const SERVICE_NAME: &str = "export-ready-api";

const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];

pub(crate) fn build_router<R, V>(
    reports: Arc<ReportService<R, V>>,
    state: AppState,
    allowed_origins: &[String],
) -> Router
where
    R: ReportRepository + 'static,
    V: IdentityVerifier + 'static,
{
    export_check_router()
        .merge(report_router(reports))
        .route("/", get(healthcheck))
        .route("/health", get(healthcheck))
        .route("/healthz", get(healthcheck))
        .route("/api/health", get(api_health))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .layer(Extension(state))
        .layer(cors_layer(allowed_origins))
}

/// Preview deployments live under `*.vercel.app`; everything else must be listed.
pub(crate) fn origin_allowed(origin: &str, extra: &[String]) -> bool {
    (origin.starts_with("https://") && origin.ends_with(".vercel.app"))
        || DEFAULT_ORIGINS.contains(&origin)
        || extra.iter().any(|allowed| allowed == origin)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let extra = allowed_origins.to_vec();
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .is_ok_and(|origin| origin_allowed(origin, &extra))
            },
        ))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "ok": true }))
}

pub(crate) async fn api_health() -> Json<serde_json::Value> {
    Json(json!({ "ok": true, "service": SERVICE_NAME }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
