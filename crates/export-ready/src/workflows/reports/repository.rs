use super::domain::{ReportId, ReportRecord};

/// Storage abstraction for saved reports. Every read and delete is scoped to
/// the owning user; a report owned by someone else behaves as absent.
pub trait ReportRepository: Send + Sync {
    fn insert(&self, record: ReportRecord) -> Result<ReportRecord, RepositoryError>;
    /// Newest first, at most `limit` records.
    fn list_for_user(&self, user_id: &str, limit: usize)
        -> Result<Vec<ReportRecord>, RepositoryError>;
    fn fetch(&self, user_id: &str, id: &ReportId) -> Result<Option<ReportRecord>, RepositoryError>;
    fn delete(&self, user_id: &str, id: &ReportId) -> Result<Option<ReportId>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Report not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
