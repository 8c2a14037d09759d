//! Export readiness classification: keyword classifier, category packs, and
//! the overlay pipeline that turns them into a checklist for one destination.

pub mod assembler;
pub mod classifier;
pub mod country;
pub mod domain;
pub mod normalizer;
pub mod packs;
pub mod router;

pub use assembler::assemble;
pub use classifier::classify;
pub use country::{resolve_destination, Destination};
pub use domain::{
    Confidence, CountryRule, Experience, ExportQuery, ExportReadinessResponse, HsCandidate,
    HsExplanation, Incoterm, InvalidQuery, OfficialLink, ProductCategory, RiskLevel,
};
pub use normalizer::normalize_country;
pub use packs::{resolve_pack, CategoryPack};
pub use router::{export_check_router, ExportCheckRequest};

use tracing::debug;

/// Stateless engine over the built-in reference tables. Safe to share across
/// any number of concurrent requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExportReadinessEngine;

impl ExportReadinessEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, query: &ExportQuery) -> ExportReadinessResponse {
        let category = classify(&query.product);
        let pack = resolve_pack(category);
        let response = assemble(query, category, pack);

        debug!(
            category = %category,
            risk = response.risk_level.label(),
            destination = ?resolve_destination(&query.country),
            journey_stage = %response.journey_stage,
            "export readiness evaluated"
        );

        response
    }
}

/// Validate the raw triple and run the engine.
pub fn classify_export_readiness(
    product: &str,
    country: &str,
    experience: &str,
) -> Result<ExportReadinessResponse, InvalidQuery> {
    let query = ExportQuery::new(product, country, experience)?;
    Ok(ExportReadinessEngine::new().evaluate(&query))
}

#[cfg(test)]
mod tests;
