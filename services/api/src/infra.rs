use export_ready::config::AuthConfig;
use export_ready::identity::StaticIdentityVerifier;
use export_ready::workflows::reports::{ReportId, ReportRecord, ReportRepository, RepositoryError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local report store. Contents are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryReportRepository {
    records: Arc<Mutex<HashMap<ReportId, ReportRecord>>>,
}

impl ReportRepository for InMemoryReportRepository {
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
        match guard.get(id) {
            Some(record) if record.user_id == user_id => {
                Ok(guard.remove(id).map(|record| record.id))
            }
            _ => Ok(None),
        }
    }
}

pub(crate) fn identity_verifier(config: &AuthConfig) -> StaticIdentityVerifier {
    StaticIdentityVerifier::new(config.tokens.iter().cloned())
}
