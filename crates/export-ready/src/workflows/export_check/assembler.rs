use std::collections::HashSet;

use super::classifier::mentions_tshirt;
use super::country::{country_pack, resolve_destination, CountryRulePack, Destination, OverlayMode};
use super::domain::{
    CountryRule, Experience, ExportQuery, ExportReadinessResponse, HsCandidate, HsExplanation,
    Incoterm, OfficialLink, ProductCategory,
};
use super::packs::{CategoryPack, GENERIC_FALLBACK_HS, TSHIRT_HS, UNKNOWN_HS};

pub const HS_SUGGESTION_COUNT: usize = 3;

pub const BEGINNER_WARNINGS: [&str; 2] = ["Hire a freight forwarder", "Avoid CIF pricing initially"];

pub const UNIVERSAL_NEXT_STEPS: [&str; 3] = [
    "Confirm HS code",
    "Talk to logistics partner",
    "Confirm importer/buyer details",
];

pub const FALLBACK_WARNING: &str =
    "Regulations vary by destination—verify local import rules before shipment.";

pub const UNKNOWN_HS_NOTE: &str =
    "No direct HS match found. Add details (material, composition, use, processing) for better suggestion.";

pub const GUIDANCE_HS_NOTE: &str =
    "HS code suggestions are guidance only. Confirm final HS code with a customs broker or official tariff tool.";

pub const MORE_DETAILS_NEXT_STEP: &str = "Add more product details for better HS classification";

const BASELINE_COUNTRY_RULES: &[(&str, &str)] = &[
    (
        "Importer of Record",
        "Confirm who is the Importer of Record for the shipment.",
    ),
    (
        "Tariff & Duties",
        "Duties/VAT depend on HS code and origin. Confirm using official tariff tools.",
    ),
    (
        "Invoice accuracy",
        "Invoice must match packing list and include HS, incoterm, values, origin, and currency.",
    ),
];

const BASELINE_CHECKLIST: &[&str] = &[
    "Confirm Importer of Record (buyer or broker).",
    "Confirm final HS code using a tariff tool or broker.",
    "Prepare Commercial Invoice (HS, incoterm, values, origin, currency).",
    "Prepare Packing List (weights, cartons, dimensions).",
];

const BASELINE_LINKS: &[(&str, &str)] = &[
    (
        "WCO HS information",
        "https://www.wcoomd.org/en/topics/nomenclature.aspx",
    ),
    (
        "UN/CEFACT trade facilitation",
        "https://unece.org/trade/cefact",
    ),
];

/// Inputs shared by every overlay stage.
pub struct OverlayContext<'a> {
    pub query: &'a ExportQuery,
    pub category: ProductCategory,
    pub pack: &'a CategoryPack,
    pub destination: Option<Destination>,
}

type Overlay = fn(ExportReadinessResponse, &OverlayContext<'_>) -> ExportReadinessResponse;

/// Stages run in this order; later stages win where sources conflict.
const PIPELINE: &[Overlay] = &[
    hs_overlay,
    category_overlay,
    destination_overlay,
    experience_overlay,
    finalize,
];

/// Combine the classified category, its pack and the destination/experience
/// overlays into the final response.
pub fn assemble(
    query: &ExportQuery,
    category: ProductCategory,
    pack: &CategoryPack,
) -> ExportReadinessResponse {
    let context = OverlayContext {
        query,
        category,
        pack,
        destination: resolve_destination(&query.country),
    };

    PIPELINE
        .iter()
        .fold(baseline(&context), |response, overlay| {
            overlay(response, &context)
        })
}

/// Seed the response from the query and the category pack, with generic
/// country guidance so no section starts empty.
pub(crate) fn baseline(context: &OverlayContext<'_>) -> ExportReadinessResponse {
    let query = context.query;
    let pack = context.pack;

    let mut documents = Vec::new();
    for document in pack.documents() {
        push_unique(&mut documents, document);
    }

    ExportReadinessResponse {
        product: query.product.clone(),
        country: query.country.clone(),
        experience: query.experience,
        allowed: true,
        product_category: context.category,
        risk_level: pack.risk_level,
        risk_reason: pack.risk_reason.to_string(),
        journey_stage: pack.journey_stage.to_string(),
        recommended_incoterm: Incoterm::for_experience(query.experience),
        hs_code_suggestions: Vec::new(),
        hs_explanations: Vec::new(),
        hs_note: String::new(),
        documents,
        warnings: to_strings(pack.warnings),
        next_steps: Vec::new(),
        compliance_checklist: to_strings(BASELINE_CHECKLIST),
        country_rules: to_rules(BASELINE_COUNTRY_RULES),
        official_links: to_links(BASELINE_LINKS),
    }
}

/// Finalize the HS suggestion list together with its rationale and note.
pub(crate) fn hs_overlay(
    mut response: ExportReadinessResponse,
    context: &OverlayContext<'_>,
) -> ExportReadinessResponse {
    response.hs_code_suggestions =
        suggest_hs_codes(&context.query.product, context.category, context.pack);

    response.hs_explanations = response
        .hs_code_suggestions
        .iter()
        .map(|candidate| HsExplanation {
            code: candidate.code.clone(),
            why: context.pack.hs_rationale.to_string(),
        })
        .collect();

    if context.category == ProductCategory::Unknown {
        response.hs_note = UNKNOWN_HS_NOTE.to_string();
        response.next_steps.push(MORE_DETAILS_NEXT_STEP.to_string());
    } else {
        response.hs_note = GUIDANCE_HS_NOTE.to_string();
    }

    response
}

/// Exactly [`HS_SUGGESTION_COUNT`] candidates with unique codes.
pub fn suggest_hs_codes(
    product: &str,
    category: ProductCategory,
    pack: &CategoryPack,
) -> Vec<HsCandidate> {
    let mut candidates: Vec<HsCandidate> = Vec::with_capacity(HS_SUGGESTION_COUNT + 2);

    let pinned = mentions_tshirt(product).then_some(&TSHIRT_HS);
    for candidate in pinned.into_iter().chain(pack.hs_candidates.iter()) {
        push_unique_hs(&mut candidates, HsCandidate::from_static(candidate));
    }

    if category == ProductCategory::Unknown {
        push_unique_hs(&mut candidates, HsCandidate::from_static(&UNKNOWN_HS));
    }

    for fallback in GENERIC_FALLBACK_HS.iter() {
        if candidates.len() >= HS_SUGGESTION_COUNT {
            break;
        }
        push_unique_hs(&mut candidates, HsCandidate::from_static(fallback));
    }

    candidates.truncate(HS_SUGGESTION_COUNT);
    candidates
}

/// Category warnings that apply whatever the destination.
pub(crate) fn category_overlay(
    mut response: ExportReadinessResponse,
    context: &OverlayContext<'_>,
) -> ExportReadinessResponse {
    let warning = match context.category {
        ProductCategory::Electronics => {
            Some("If the product uses Bluetooth/radio, check destination conformity approvals.")
        }
        ProductCategory::Chemicals => {
            Some("If hazardous, confirm dangerous goods (DG) transport rules with your forwarder.")
        }
        ProductCategory::Medical => {
            Some("Confirm conformity markings/certificates required in the destination market.")
        }
        _ => None,
    };

    if let Some(warning) = warning {
        response.warnings.push(warning.to_string());
    }
    response
}

/// Apply the destination pack. The UK pack replaces the generic rules,
/// checklist and links; every other pack appends to them.
pub(crate) fn destination_overlay(
    response: ExportReadinessResponse,
    context: &OverlayContext<'_>,
) -> ExportReadinessResponse {
    let Some(destination) = context.destination else {
        return response;
    };

    let pack = country_pack(destination);
    let response = apply_country_pack(response, pack);

    match pack.food_subpack {
        Some(subpack) if context.category.is_food_like() => apply_country_pack(response, subpack),
        _ => response,
    }
}

fn apply_country_pack(
    mut response: ExportReadinessResponse,
    pack: &CountryRulePack,
) -> ExportReadinessResponse {
    let rules = to_rules(pack.country_rules);
    let checklist = to_strings(pack.compliance_checklist);
    let links = to_links(pack.official_links);

    match pack.mode {
        OverlayMode::Replace => {
            response.country_rules = rules;
            response.compliance_checklist = checklist;
            response.official_links = links;
        }
        OverlayMode::Append => {
            response.country_rules.extend(rules);
            response.compliance_checklist.extend(checklist);
            response.official_links.extend(links);
        }
    }

    for document in pack.extra_documents {
        push_unique(&mut response.documents, document);
    }
    response
        .warnings
        .extend(pack.extra_warnings.iter().map(|warning| warning.to_string()));
    response
        .next_steps
        .extend(pack.next_steps.iter().map(|step| step.to_string()));

    if let Some(stage) = pack.journey_stage_override {
        response.journey_stage = stage.to_string();
    }

    response
}

/// Beginner guidance always leads the warning list.
pub(crate) fn experience_overlay(
    mut response: ExportReadinessResponse,
    context: &OverlayContext<'_>,
) -> ExportReadinessResponse {
    if context.query.experience == Experience::Beginner {
        let existing = std::mem::take(&mut response.warnings);
        response.warnings = to_strings(&BEGINNER_WARNINGS);
        response.warnings.extend(existing);
    }
    response
}

/// Universal next steps, warning dedup and the empty-warnings fallback.
pub(crate) fn finalize(
    mut response: ExportReadinessResponse,
    _context: &OverlayContext<'_>,
) -> ExportReadinessResponse {
    response
        .next_steps
        .extend(UNIVERSAL_NEXT_STEPS.iter().map(|step| step.to_string()));

    dedup_in_place(&mut response.documents);
    dedup_in_place(&mut response.warnings);
    dedup_in_place(&mut response.next_steps);

    if response.warnings.is_empty() {
        response.warnings.push(FALLBACK_WARNING.to_string());
    }

    response
}

fn push_unique(list: &mut Vec<String>, item: &str) {
    if !list.iter().any(|existing| existing == item) {
        list.push(item.to_string());
    }
}

fn push_unique_hs(list: &mut Vec<HsCandidate>, candidate: HsCandidate) {
    if !list.iter().any(|existing| existing.code == candidate.code) {
        list.push(candidate);
    }
}

fn dedup_in_place(list: &mut Vec<String>) {
    let mut seen = HashSet::new();
    list.retain(|item| seen.insert(item.clone()));
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn to_rules(items: &[(&str, &str)]) -> Vec<CountryRule> {
    items
        .iter()
        .map(|(title, detail)| CountryRule {
            title: title.to_string(),
            detail: detail.to_string(),
        })
        .collect()
}

fn to_links(items: &[(&str, &str)]) -> Vec<OfficialLink> {
    items
        .iter()
        .map(|(label, url)| OfficialLink {
            label: label.to_string(),
            url: url.to_string(),
        })
        .collect()
}
