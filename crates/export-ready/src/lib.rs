//! Export readiness checks for small exporters: product classification,
//! destination overlays, and saved reports.

pub mod config;
pub mod error;
pub mod identity;
pub mod telemetry;
pub mod workflows;

pub use error::AppError;
pub use workflows::export_check::{
    classify_export_readiness, ExportQuery, ExportReadinessEngine, ExportReadinessResponse,
};
