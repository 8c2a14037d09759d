use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use super::domain::{
    LockedHs, ReportId, ReportRecord, ReportSummary, SaveReportRequest, REPORT_SCHEMA_VERSION,
};
use super::repository::{ReportRepository, RepositoryError};
use crate::config::ReportsConfig;
use crate::identity::{AuthError, IdentityVerifier, UserIdentity};

const MISSING_REPORT_DATA: &str = "Missing required report data";

/// Saves, lists, and deletes checklist reports on behalf of verified users.
pub struct ReportService<R, V> {
    repository: Arc<R>,
    verifier: Arc<V>,
    list_limit: usize,
}

static REPORT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_report_id() -> ReportId {
    let id = REPORT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ReportId(format!("rpt-{id:06}"))
}

impl<R, V> ReportService<R, V>
where
    R: ReportRepository + 'static,
    V: IdentityVerifier + 'static,
{
    pub fn new(repository: Arc<R>, verifier: Arc<V>, config: &ReportsConfig) -> Self {
        Self {
            repository,
            verifier,
            list_limit: config.list_limit.max(1),
        }
    }

    pub fn authenticate(&self, token: &str) -> Result<UserIdentity, ReportServiceError> {
        if token.trim().is_empty() {
            return Err(AuthError::MissingToken.into());
        }
        Ok(self.verifier.verify(token)?)
    }

    pub fn save(
        &self,
        identity: &UserIdentity,
        request: SaveReportRequest,
    ) -> Result<ReportRecord, ReportServiceError> {
        let SaveReportRequest {
            product,
            country,
            experience,
            result,
            locked_hs,
        } = request;

        let (Some(product), Some(country), Some(experience), Some(result), Some(locked_hs)) = (
            non_blank(product),
            non_blank(country),
            non_blank(experience),
            result.filter(|value| !value.is_null()),
            locked_hs.filter(|hs| !hs.code.trim().is_empty()),
        ) else {
            return Err(ReportServiceError::InvalidReport(
                MISSING_REPORT_DATA.to_string(),
            ));
        };

        let LockedHs { code, description } = locked_hs;
        let record = ReportRecord {
            id: next_report_id(),
            schema_version: REPORT_SCHEMA_VERSION,
            user_id: identity.user_id.clone(),
            email: identity.email.clone(),
            product,
            country,
            experience,
            hs_code: code.trim().to_string(),
            hs_description: description,
            risk_level: result_field(&result, "risk_level"),
            incoterm: result_field(&result, "recommended_incoterm"),
            journey_stage: result_field(&result, "journey_stage"),
            result,
            created_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    pub fn list(&self, identity: &UserIdentity) -> Result<Vec<ReportSummary>, ReportServiceError> {
        let records = self
            .repository
            .list_for_user(&identity.user_id, self.list_limit)?;
        Ok(records
            .iter()
            .take(self.list_limit)
            .map(ReportRecord::summary)
            .collect())
    }

    pub fn get(
        &self,
        identity: &UserIdentity,
        id: &ReportId,
    ) -> Result<ReportRecord, ReportServiceError> {
        let record = self
            .repository
            .fetch(&identity.user_id, id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn delete(
        &self,
        identity: &UserIdentity,
        id: &ReportId,
    ) -> Result<ReportId, ReportServiceError> {
        let deleted = self
            .repository
            .delete(&identity.user_id, id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(deleted)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

fn result_field(result: &Value, key: &str) -> String {
    result
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ReportServiceError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("{0}")]
    InvalidReport(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
