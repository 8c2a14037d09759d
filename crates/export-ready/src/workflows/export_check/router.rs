use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{ExportQuery, ExportReadinessResponse};
use super::ExportReadinessEngine;
use crate::error::AppError;

/// Wire shape of an export check. Fields are optional here so that a missing
/// field surfaces as a readable 400 instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportCheckRequest {
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
}

impl ExportCheckRequest {
    pub fn into_query(self) -> Result<ExportQuery, super::InvalidQuery> {
        ExportQuery::new(
            self.product.as_deref().unwrap_or_default(),
            self.country.as_deref().unwrap_or_default(),
            self.experience.as_deref().unwrap_or_default(),
        )
    }
}

pub fn export_check_router() -> Router {
    Router::new().route("/api/export-check", post(export_check_handler))
}

pub(crate) async fn export_check_handler(
    payload: Result<Json<ExportCheckRequest>, JsonRejection>,
) -> Result<Json<ExportReadinessResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        info!(error = %rejection.body_text(), "rejected export check body");
        AppError::from(rejection)
    })?;
    let query = request.into_query().map_err(|err| {
        info!(error = %err, "rejected export check");
        AppError::from(err)
    })?;

    let response = ExportReadinessEngine::new().evaluate(&query);
    Ok(Json(response))
}
