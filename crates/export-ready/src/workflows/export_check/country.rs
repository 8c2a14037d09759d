use std::collections::HashMap;
use std::sync::LazyLock;

use super::normalizer::normalize_country;

/// Destinations that carry their own rule pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    UnitedKingdom,
    EuropeanUnion,
    UnitedArabEmirates,
    India,
}

/// How a destination pack combines with the generic baseline guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayMode {
    /// Rules, checklist and links are swapped out for the pack's own.
    Replace,
    /// Pack entries are added after the baseline.
    Append,
}

#[derive(Debug)]
pub struct CountryRulePack {
    pub destination: Destination,
    pub mode: OverlayMode,
    pub extra_documents: &'static [&'static str],
    pub extra_warnings: &'static [&'static str],
    pub next_steps: &'static [&'static str],
    pub country_rules: &'static [(&'static str, &'static str)],
    pub compliance_checklist: &'static [&'static str],
    pub official_links: &'static [(&'static str, &'static str)],
    pub journey_stage_override: Option<&'static str>,
    /// Layered on top of this pack when the product is food-like.
    pub food_subpack: Option<&'static CountryRulePack>,
}

static UK_FOOD: CountryRulePack = CountryRulePack {
    destination: Destination::UnitedKingdom,
    mode: OverlayMode::Append,
    extra_documents: &[
        "Ingredients / Product Specification Sheet",
        "Label Artwork / Label Text (if available)",
    ],
    extra_warnings: &[],
    next_steps: &[],
    country_rules: &[
        (
            "Food labeling",
            "UK food imports must comply with labeling rules (ingredients, allergens, net weight, expiry/best-before, importer details).",
        ),
        (
            "Ingredients & allergens",
            "Maintain a clear ingredient list and allergen statement. Keep a product spec sheet ready.",
        ),
    ],
    compliance_checklist: &[
        "Prepare Ingredients / Product Specification Sheet.",
        "Prepare label info: ingredients, allergens, net weight, dates, importer details.",
        "Confirm if any food certificates are needed (depends on product/category).",
    ],
    official_links: &[
        (
            "UK food labeling guidance",
            "https://www.gov.uk/food-labelling-and-packaging",
        ),
        ("Food Standards Agency (UK)", "https://www.food.gov.uk/"),
    ],
    journey_stage_override: Some("UK_FOOD_COMPLIANCE"),
    food_subpack: None,
};

static UK: CountryRulePack = CountryRulePack {
    destination: Destination::UnitedKingdom,
    mode: OverlayMode::Replace,
    extra_documents: &["EORI Number"],
    extra_warnings: &[],
    next_steps: &[],
    country_rules: &[
        (
            "Importer of Record",
            "Confirm who is the Importer of Record in the UK (buyer, agent, or broker).",
        ),
        (
            "Tariff & Duties",
            "Duties/VAT depend on HS code and origin. Confirm with the UK Trade Tariff.",
        ),
        (
            "Invoice accuracy",
            "Invoice must match packing list and include HS, incoterm, values, origin, and currency.",
        ),
    ],
    compliance_checklist: &[
        "Confirm Importer of Record (buyer or broker).",
        "Confirm final HS code using the UK Trade Tariff or a broker.",
        "Prepare Commercial Invoice (HS, incoterm, values, origin, currency).",
        "Prepare Packing List (weights, cartons, dimensions).",
        "Confirm EORI details (usually importer).",
    ],
    official_links: &[
        (
            "UK Trade Tariff (duty lookup)",
            "https://www.trade-tariff.service.gov.uk/",
        ),
        (
            "Import goods into the UK (GOV.UK)",
            "https://www.gov.uk/import-goods-into-uk",
        ),
    ],
    journey_stage_override: None,
    food_subpack: Some(&UK_FOOD),
};

static EU: CountryRulePack = CountryRulePack {
    destination: Destination::EuropeanUnion,
    mode: OverlayMode::Append,
    extra_documents: &["EORI Number (EU importer)"],
    extra_warnings: &["EU imports: import VAT applies and CE marking may be required depending on the product."],
    next_steps: &["Check duty rates and measures in the EU TARIC database"],
    country_rules: &[],
    compliance_checklist: &[],
    official_links: &[(
        "EU TARIC database",
        "https://ec.europa.eu/taxation_customs/dds2/taric/taric_consultation.jsp",
    )],
    journey_stage_override: None,
    food_subpack: None,
};

static UAE: CountryRulePack = CountryRulePack {
    destination: Destination::UnitedArabEmirates,
    mode: OverlayMode::Append,
    extra_documents: &["Certificate of Origin (chamber attested)"],
    extra_warnings: &["UAE shipments may need invoice and certificate legalization through a chamber of commerce."],
    next_steps: &["Confirm document attestation requirements with the UAE buyer"],
    country_rules: &[],
    compliance_checklist: &[],
    official_links: &[],
    journey_stage_override: None,
    food_subpack: None,
};

static INDIA: CountryRulePack = CountryRulePack {
    destination: Destination::India,
    mode: OverlayMode::Append,
    extra_documents: &["Importer-Exporter Code (IEC) of buyer"],
    extra_warnings: &["India may require BIS certification or FSSAI registration depending on the product."],
    next_steps: &["Confirm the buyer's IEC and any BIS/FSSAI registration"],
    country_rules: &[],
    compliance_checklist: &[],
    official_links: &[],
    journey_stage_override: None,
    food_subpack: None,
};

const UK_ALIASES: &[&str] = &[
    "uk",
    "united kingdom",
    "great britain",
    "britain",
    "gb",
    "england",
    "scotland",
    "wales",
    "northern ireland",
];

const EU_ALIASES: &[&str] = &[
    "eu",
    "european union",
    "austria",
    "belgium",
    "bulgaria",
    "croatia",
    "cyprus",
    "czech republic",
    "czechia",
    "denmark",
    "estonia",
    "finland",
    "france",
    "germany",
    "greece",
    "hungary",
    "ireland",
    "italy",
    "latvia",
    "lithuania",
    "luxembourg",
    "malta",
    "netherlands",
    "the netherlands",
    "holland",
    "poland",
    "portugal",
    "romania",
    "slovakia",
    "slovenia",
    "spain",
    "sweden",
];

const UAE_ALIASES: &[&str] = &["uae", "united arab emirates", "dubai", "abu dhabi", "sharjah"];

const INDIA_ALIASES: &[&str] = &["india", "bharat"];

static DESTINATION_ALIASES: LazyLock<HashMap<&'static str, Destination>> = LazyLock::new(|| {
    let groups: [(&[&'static str], Destination); 4] = [
        (UK_ALIASES, Destination::UnitedKingdom),
        (EU_ALIASES, Destination::EuropeanUnion),
        (UAE_ALIASES, Destination::UnitedArabEmirates),
        (INDIA_ALIASES, Destination::India),
    ];
    groups
        .into_iter()
        .flat_map(|(aliases, destination)| aliases.iter().map(move |alias| (*alias, destination)))
        .collect()
});

/// Resolve a raw destination name to a known destination, if any.
pub fn resolve_destination(raw_country: &str) -> Option<Destination> {
    let key = normalize_country(raw_country);
    DESTINATION_ALIASES.get(key.as_str()).copied()
}

pub fn country_pack(destination: Destination) -> &'static CountryRulePack {
    match destination {
        Destination::UnitedKingdom => &UK,
        Destination::EuropeanUnion => &EU,
        Destination::UnitedArabEmirates => &UAE,
        Destination::India => &INDIA,
    }
}
