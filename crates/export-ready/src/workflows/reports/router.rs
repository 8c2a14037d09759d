use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::info;

use super::domain::{ReportId, SaveReportRequest};
use super::repository::ReportRepository;
use super::service::{ReportService, ReportServiceError};
use crate::error::AppError;
use crate::identity::{bearer_token, IdentityVerifier, UserIdentity};

type SharedService<R, V> = Arc<ReportService<R, V>>;

pub fn report_router<R, V>(service: SharedService<R, V>) -> Router
where
    R: ReportRepository + 'static,
    V: IdentityVerifier + 'static,
{
    Router::new()
        .route(
            "/api/reports",
            get(list_handler::<R, V>).post(save_handler::<R, V>),
        )
        .route(
            "/api/reports/:report_id",
            get(fetch_handler::<R, V>).delete(delete_handler::<R, V>),
        )
        .with_state(service)
}

pub(crate) fn caller<R, V>(
    service: &ReportService<R, V>,
    headers: &HeaderMap,
) -> Result<UserIdentity, AppError>
where
    R: ReportRepository + 'static,
    V: IdentityVerifier + 'static,
{
    bearer_token(headers)
        .map_err(ReportServiceError::from)
        .and_then(|token| service.authenticate(token))
        .map_err(|err| {
            info!(error = %err, "rejected reports request");
            AppError::from(err)
        })
}

pub(crate) async fn save_handler<R, V>(
    State(service): State<SharedService<R, V>>,
    headers: HeaderMap,
    payload: Result<Json<SaveReportRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError>
where
    R: ReportRepository + 'static,
    V: IdentityVerifier + 'static,
{
    let identity = caller(&service, &headers)?;
    let Json(request) = payload?;
    let record = service.save(&identity, request)?;
    info!(report_id = %record.id, user_id = %identity.user_id, "report saved");
    Ok(Json(json!({ "ok": true, "report_id": record.id })))
}

pub(crate) async fn list_handler<R, V>(
    State(service): State<SharedService<R, V>>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError>
where
    R: ReportRepository + 'static,
    V: IdentityVerifier + 'static,
{
    let identity = caller(&service, &headers)?;
    let reports = service.list(&identity)?;
    Ok(Json(json!({ "ok": true, "reports": reports })))
}

pub(crate) async fn fetch_handler<R, V>(
    State(service): State<SharedService<R, V>>,
    headers: HeaderMap,
    Path(report_id): Path<String>,
) -> Result<Json<Value>, AppError>
where
    R: ReportRepository + 'static,
    V: IdentityVerifier + 'static,
{
    let identity = caller(&service, &headers)?;
    let report = service.get(&identity, &ReportId(report_id))?;
    Ok(Json(json!({ "ok": true, "report": report })))
}

pub(crate) async fn delete_handler<R, V>(
    State(service): State<SharedService<R, V>>,
    headers: HeaderMap,
    Path(report_id): Path<String>,
) -> Result<Json<Value>, AppError>
where
    R: ReportRepository + 'static,
    V: IdentityVerifier + 'static,
{
    let identity = caller(&service, &headers)?;
    let deleted = service.delete(&identity, &ReportId(report_id))?;
    info!(report_id = %deleted, user_id = %identity.user_id, "report deleted");
    Ok(Json(json!({ "ok": true, "deleted_id": deleted })))
}
