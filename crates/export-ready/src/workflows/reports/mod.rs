//! Saved export checklists, scoped per authenticated user.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    LockedHs, ReportId, ReportRecord, ReportSummary, SaveReportRequest, REPORT_SCHEMA_VERSION,
};
pub use repository::{ReportRepository, RepositoryError};
pub use router::report_router;
pub use service::{ReportService, ReportServiceError};
