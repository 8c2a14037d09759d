use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;

use crate::config::ReportsConfig;
use crate::identity::{StaticIdentityVerifier, UserIdentity};
use crate::workflows::export_check::classify_export_readiness;
use crate::workflows::reports::{
    LockedHs, ReportId, ReportRecord, ReportRepository, ReportService, RepositoryError,
    SaveReportRequest,
};

pub(super) const OWNER_TOKEN: &str = "owner-token";
pub(super) const OTHER_TOKEN: &str = "other-token";

pub(super) fn owner() -> UserIdentity {
    UserIdentity {
        user_id: "user-owner".to_string(),
        email: "owner@example.com".to_string(),
    }
}

pub(super) fn other_user() -> UserIdentity {
    UserIdentity {
        user_id: "user-other".to_string(),
        email: "other@example.com".to_string(),
    }
}

pub(super) fn verifier() -> StaticIdentityVerifier {
    StaticIdentityVerifier::new([
        (OWNER_TOKEN.to_string(), owner()),
        (OTHER_TOKEN.to_string(), other_user()),
    ])
}

pub(super) fn save_request(product: &str) -> SaveReportRequest {
    let response = classify_export_readiness(product, "United Kingdom", "beginner")
        .expect("valid query");
    let primary = response
        .hs_code_suggestions
        .first()
        .cloned()
        .expect("three suggestions");
    SaveReportRequest {
        product: Some(product.to_string()),
        country: Some("United Kingdom".to_string()),
        experience: Some("beginner".to_string()),
        result: Some(serde_json::to_value(&response).expect("response serializes")),
        locked_hs: Some(LockedHs {
            code: primary.code,
            description: primary.description.to_string(),
        }),
    }
}

pub(super) fn build_service(
    list_limit: usize,
) -> (
    ReportService<MemoryRepository, StaticIdentityVerifier>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ReportService::new(
        repository.clone(),
        Arc::new(verifier()),
        &ReportsConfig { list_limit },
    );
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ReportId, ReportRecord>>>,
}

impl ReportRepository for MemoryRepository {
    fn insert(&self, record: ReportRecord) -> Result<ReportRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn list_for_user(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<ReportRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<ReportRecord> = guard
            .values()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| (b.created_at, &b.id).cmp(&(a.created_at, &a.id)));
        records.truncate(limit);
        Ok(records)
    }

    fn fetch(&self, user_id: &str, id: &ReportId) -> Result<Option<ReportRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .get(id)
            .filter(|record| record.user_id == user_id)
            .cloned())
    }

    fn delete(&self, user_id: &str, id: &ReportId) -> Result<Option<ReportId>, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let owned = guard
            .get(id)
            .is_some_and(|record| record.user_id == user_id);
        if !owned {
            return Ok(None);
        }
        Ok(guard.remove(id).map(|record| record.id))
    }
}

pub(super) struct UnavailableRepository;

impl ReportRepository for UnavailableRepository {
    fn insert(&self, _record: ReportRecord) -> Result<ReportRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list_for_user(
        &self,
        _user_id: &str,
        _limit: usize,
    ) -> Result<Vec<ReportRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(
        &self,
        _user_id: &str,
        _id: &ReportId,
    ) -> Result<Option<ReportRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn delete(&self, _user_id: &str, _id: &ReportId) -> Result<Option<ReportId>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn authed(method: &str, uri: &str, token: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"));
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).expect("json body")))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
