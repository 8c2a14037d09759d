use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Current layout of a persisted report.
pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(pub String);

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// HS code the user settled on before saving.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedHs {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
}

/// Body of `POST /api/reports`. Every field is optional on the wire so the
/// service can answer with a single validation message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveReportRequest {
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default, alias = "lockedHs")]
    pub locked_hs: Option<LockedHs>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub id: ReportId,
    pub schema_version: u32,
    pub user_id: String,
    pub email: String,
    pub product: String,
    pub country: String,
    pub experience: String,
    pub hs_code: String,
    pub hs_description: String,
    pub risk_level: String,
    pub incoterm: String,
    pub journey_stage: String,
    pub result: Value,
    pub created_at: DateTime<Utc>,
}

impl ReportRecord {
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            id: self.id.clone(),
            product: self.product.clone(),
            country: self.country.clone(),
            experience: self.experience.clone(),
            hs_code: self.hs_code.clone(),
            hs_description: self.hs_description.clone(),
            risk_level: self.risk_level.clone(),
            incoterm: self.incoterm.clone(),
            journey_stage: self.journey_stage.clone(),
            result: self.result.clone(),
            created_at: self.created_at,
        }
    }
}

/// Listing view; omits ownership and schema metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub id: ReportId,
    pub product: String,
    pub country: String,
    pub experience: String,
    pub hs_code: String,
    pub hs_description: String,
    pub risk_level: String,
    pub incoterm: String,
    pub journey_stage: String,
    pub result: Value,
    pub created_at: DateTime<Utc>,
}
