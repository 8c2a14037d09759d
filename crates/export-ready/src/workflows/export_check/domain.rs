use std::fmt;

use serde::{Deserialize, Serialize};

/// Self-reported exporter maturity, used to pick incoterms and beginner guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Experience {
    Beginner,
    Intermediate,
    Expert,
}

impl Experience {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "expert" => Some(Self::Expert),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Experience::Beginner => "beginner",
            Experience::Intermediate => "intermediate",
            Experience::Expert => "expert",
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated input triple for a readiness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportQuery {
    pub product: String,
    pub country: String,
    pub experience: Experience,
}

/// Missing or unusable field on an inbound export check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidQuery {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("experience must be one of beginner, intermediate, expert (found '{0}')")]
    UnknownExperience(String),
}

impl ExportQuery {
    /// Reject blank fields before any classification happens.
    pub fn new(product: &str, country: &str, experience: &str) -> Result<Self, InvalidQuery> {
        let product = required("product", product)?;
        let country = required("country", country)?;
        let raw_experience = required("experience", experience)?;
        let experience = Experience::parse(&raw_experience)
            .ok_or(InvalidQuery::UnknownExperience(raw_experience))?;

        Ok(Self {
            product,
            country,
            experience,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, InvalidQuery> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InvalidQuery::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Product buckets recognized by the keyword classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Textile,
    Spices,
    Food,
    Machinery,
    Chemicals,
    Electronics,
    Furniture,
    Cosmetics,
    Medical,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 10] = [
        ProductCategory::Textile,
        ProductCategory::Spices,
        ProductCategory::Food,
        ProductCategory::Machinery,
        ProductCategory::Chemicals,
        ProductCategory::Electronics,
        ProductCategory::Furniture,
        ProductCategory::Cosmetics,
        ProductCategory::Medical,
        ProductCategory::Unknown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProductCategory::Textile => "textile",
            ProductCategory::Spices => "spices",
            ProductCategory::Food => "food",
            ProductCategory::Machinery => "machinery",
            ProductCategory::Chemicals => "chemicals",
            ProductCategory::Electronics => "electronics",
            ProductCategory::Furniture => "furniture",
            ProductCategory::Cosmetics => "cosmetics",
            ProductCategory::Medical => "medical",
            ProductCategory::Unknown => "UNKNOWN",
        }
    }

    /// Spices ride the same food-compliance track as general food.
    pub fn is_food_like(self) -> bool {
        matches!(self, ProductCategory::Food | ProductCategory::Spices)
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn label(self) -> &'static str {
        match self {
            Confidence::High => "HIGH",
            Confidence::Medium => "MEDIUM",
            Confidence::Low => "LOW",
        }
    }
}

/// Recommended trade term; beginners are steered towards seller-managed delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Incoterm {
    Dap,
    Fob,
}

impl Incoterm {
    pub fn for_experience(experience: Experience) -> Self {
        match experience {
            Experience::Beginner => Incoterm::Dap,
            Experience::Intermediate | Experience::Expert => Incoterm::Fob,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Incoterm::Dap => "DAP",
            Incoterm::Fob => "FOB",
        }
    }
}

/// Tariff code candidate. `code` is either an HS heading or the literal `UNKNOWN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsCandidate {
    pub code: String,
    pub description: String,
    pub confidence: Confidence,
}

impl HsCandidate {
    pub(crate) fn from_static(candidate: &StaticHsCandidate) -> Self {
        Self {
            code: candidate.code.to_string(),
            description: candidate.description.to_string(),
            confidence: candidate.confidence,
        }
    }
}

/// Compile-time form of [`HsCandidate`] used by the reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticHsCandidate {
    pub code: &'static str,
    pub description: &'static str,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsExplanation {
    pub code: String,
    pub why: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRule {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficialLink {
    pub label: String,
    pub url: String,
}

/// Full readiness answer returned for a single query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReadinessResponse {
    pub product: String,
    pub country: String,
    pub experience: Experience,
    pub allowed: bool,
    pub product_category: ProductCategory,
    pub risk_level: RiskLevel,
    pub risk_reason: String,
    pub journey_stage: String,
    pub recommended_incoterm: Incoterm,
    pub hs_code_suggestions: Vec<HsCandidate>,
    pub hs_explanations: Vec<HsExplanation>,
    pub hs_note: String,
    pub documents: Vec<String>,
    pub warnings: Vec<String>,
    pub next_steps: Vec<String>,
    pub compliance_checklist: Vec<String>,
    pub country_rules: Vec<CountryRule>,
    pub official_links: Vec<OfficialLink>,
}
