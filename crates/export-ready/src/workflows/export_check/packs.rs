use super::domain::{Confidence, ProductCategory, RiskLevel, StaticHsCandidate};

/// Documents every shipment needs regardless of category.
pub const BASELINE_DOCUMENTS: &[&str] = &[
    "Commercial Invoice",
    "Packing List",
    "Certificate of Origin",
    "Product Specification Sheet (materials, composition, use)",
];

const GENERIC_HS_RATIONALE: &str = "Provide more product details for confident HS classification.";

/// Static default guidance for one product category.
#[derive(Debug)]
pub struct CategoryPack {
    pub category: ProductCategory,
    pub risk_level: RiskLevel,
    pub risk_reason: &'static str,
    pub journey_stage: &'static str,
    pub extra_documents: &'static [&'static str],
    pub warnings: &'static [&'static str],
    pub hs_candidates: &'static [StaticHsCandidate],
    pub hs_rationale: &'static str,
}

impl CategoryPack {
    /// Baseline documents followed by the category additions.
    pub fn documents(&self) -> impl Iterator<Item = &'static str> + '_ {
        BASELINE_DOCUMENTS
            .iter()
            .chain(self.extra_documents.iter())
            .copied()
    }
}

const fn hs(code: &'static str, description: &'static str, confidence: Confidence) -> StaticHsCandidate {
    StaticHsCandidate {
        code,
        description,
        confidence,
    }
}

/// Knitted T-shirt heading, pinned whenever the product names a T-shirt.
pub static TSHIRT_HS: StaticHsCandidate = hs(
    "6109",
    "T-shirts, singlets and other vests (knitted or crocheted)",
    Confidence::High,
);

/// Placeholder candidate emitted when nothing matched.
pub static UNKNOWN_HS: StaticHsCandidate = hs(
    "UNKNOWN",
    "Needs classification — provide composition/use/processing",
    Confidence::Low,
);

/// Padding used until a suggestion list reaches three entries, in order.
pub static GENERIC_FALLBACK_HS: [StaticHsCandidate; 3] = [
    hs("8479", "Machines and mechanical appliances (generic)", Confidence::Low),
    hs("3926", "Other articles of plastics (generic)", Confidence::Low),
    hs("7326", "Other articles of iron or steel (generic)", Confidence::Low),
];

static TEXTILE: CategoryPack = CategoryPack {
    category: ProductCategory::Textile,
    risk_level: RiskLevel::Low,
    risk_reason: "Textile exports are usually straightforward if composition and labeling are correct.",
    journey_stage: "DOCS",
    extra_documents: &["Fabric Composition Certificate (if available)"],
    warnings: &["Confirm fabric composition (e.g., 100% cotton vs blends) for correct HS code."],
    hs_candidates: &[
        hs("6205", "Men’s or boys’ shirts (not knitted)", Confidence::Medium),
        hs("6110", "Sweaters, pullovers and similar articles (knitted)", Confidence::Low),
        hs("6206", "Women’s or girls’ blouses and shirts (not knitted)", Confidence::Low),
    ],
    hs_rationale: "Matched textile keywords; confirm fabric composition and knit/non-knit.",
};

static SPICES: CategoryPack = CategoryPack {
    category: ProductCategory::Spices,
    risk_level: RiskLevel::Medium,
    risk_reason: "Spices require correct HS chapter + labeling/ingredient details; may trigger food compliance checks.",
    journey_stage: "FOOD_COMPLIANCE",
    extra_documents: &[
        "Ingredients / Product Specification Sheet",
        "Label Artwork / Label Text (if available)",
    ],
    warnings: &["Spices/blends may require labeling + allergen statements (if blended/processed)."],
    hs_candidates: &[
        hs("0904", "Pepper (capsicum/pimenta), dried or crushed", Confidence::Medium),
        hs(
            "0910",
            "Ginger, saffron, turmeric, thyme, bay leaves, curry and other spices",
            Confidence::High,
        ),
        hs(
            "0909",
            "Seeds of anise, badian, fennel, coriander, cumin, caraway, juniper",
            Confidence::Medium,
        ),
    ],
    hs_rationale: "Matched spice-related keywords; confirm if single spice vs blend.",
};

static FOOD: CategoryPack = CategoryPack {
    category: ProductCategory::Food,
    risk_level: RiskLevel::Medium,
    risk_reason: "Food exports often require labeling, allergen, shelf-life and destination compliance checks.",
    journey_stage: "FOOD_COMPLIANCE",
    extra_documents: &[
        "Ingredients / Product Specification Sheet",
        "Label Artwork / Label Text (if available)",
    ],
    warnings: &["Food exports may require labeling/allergen/shelf-life checks depending on destination rules."],
    hs_candidates: &[
        hs(
            "2008",
            "Fruits, nuts and other edible parts of plants, otherwise prepared or preserved",
            Confidence::Medium,
        ),
        hs("2106", "Food preparations not elsewhere specified", Confidence::Low),
        hs("1905", "Bread, pastry, cakes, biscuits and other baked goods", Confidence::Low),
    ],
    hs_rationale: "Matched food-related keywords; confirm processing and ingredients.",
};

static MACHINERY: CategoryPack = CategoryPack {
    category: ProductCategory::Machinery,
    risk_level: RiskLevel::Medium,
    risk_reason: "Machinery/parts need precise technical specs and end-use for classification.",
    journey_stage: "TECH_DOCS",
    extra_documents: &["Technical Datasheet / Manual", "End-use / Function Description"],
    warnings: &["Machines/parts often need clear technical specs and end-use to classify correctly."],
    hs_candidates: &[
        hs("8466", "Parts and accessories for machine-tools", Confidence::Medium),
        hs("8483", "Transmission shafts, gears and gearing; parts", Confidence::Low),
        hs("8479", "Machines and mechanical appliances (other)", Confidence::Low),
    ],
    hs_rationale: "Matched machinery keywords; confirm technical specs and end-use.",
};

static CHEMICALS: CategoryPack = CategoryPack {
    category: ProductCategory::Chemicals,
    risk_level: RiskLevel::High,
    risk_reason: "Chemicals may be regulated and require SDS + dangerous goods compliance.",
    journey_stage: "HAZMAT",
    extra_documents: &[
        "Safety Data Sheet (SDS/MSDS)",
        "Hazard Classification / UN number (if applicable)",
    ],
    warnings: &["Chemicals may be regulated as dangerous goods; SDS and transport compliance are critical."],
    hs_candidates: &[
        hs(
            "3814",
            "Organic composite solvents and thinners; prepared paint/varnish removers",
            Confidence::Low,
        ),
        hs("3402", "Organic surface-active agents; washing preparations", Confidence::Low),
        hs("2905", "Acyclic alcohols and their derivatives", Confidence::Low),
    ],
    hs_rationale: "Matched chemical keywords; confirm SDS and hazard classification.",
};

static ELECTRONICS: CategoryPack = CategoryPack {
    category: ProductCategory::Electronics,
    risk_level: RiskLevel::Medium,
    risk_reason: "Electronics can require conformity approvals and battery transport documentation.",
    journey_stage: "REGULATORY",
    extra_documents: &[
        "Technical Specs Sheet",
        "Battery Transport Declaration (if applicable)",
    ],
    warnings: &["Electronics may require destination approvals (e.g., radio/Bluetooth conformity, battery transport rules)."],
    hs_candidates: &[
        hs(
            "8518",
            "Microphones and loudspeakers; audio-frequency amplifiers; parts",
            Confidence::Medium,
        ),
        hs("8517", "Telephone/radio communication apparatus; parts", Confidence::Low),
        hs("8504", "Electrical transformers, converters, power supplies", Confidence::Low),
    ],
    hs_rationale: "Matched electronics keywords; confirm radio/Bluetooth and battery details.",
};

static FURNITURE: CategoryPack = CategoryPack {
    category: ProductCategory::Furniture,
    risk_level: RiskLevel::Low,
    risk_reason: "Furniture is typically low risk but wood/packaging can require ISPM-15 compliance.",
    journey_stage: "DOCS",
    extra_documents: &[
        "Material Composition Declaration (wood type/finish)",
        "Packaging/ISPM-15 statement (if wood packaging)",
    ],
    warnings: &["Wood/packaging may need ISPM-15 compliance depending on destination and packaging type."],
    hs_candidates: &[
        hs("9403", "Other furniture and parts thereof", Confidence::Medium),
        hs("9401", "Seats and parts thereof", Confidence::Low),
        hs("4419", "Tableware and kitchenware, of wood", Confidence::Low),
    ],
    hs_rationale: GENERIC_HS_RATIONALE,
};

static COSMETICS: CategoryPack = CategoryPack {
    category: ProductCategory::Cosmetics,
    risk_level: RiskLevel::Medium,
    risk_reason: "Cosmetics often require strict labeling/claims compliance in destination markets.",
    journey_stage: "LABEL_REVIEW",
    extra_documents: &["Ingredients (INCI) List", "Labeling & Claims Documentation"],
    warnings: &["Cosmetics often require strict labeling/claims compliance; verify destination cosmetic rules."],
    hs_candidates: &[
        hs(
            "3304",
            "Beauty or make-up preparations and preparations for skin care",
            Confidence::Medium,
        ),
        hs("3401", "Soap; organic surface-active products and preparations", Confidence::Low),
        hs("3305", "Preparations for use on the hair", Confidence::Low),
    ],
    hs_rationale: GENERIC_HS_RATIONALE,
};

static MEDICAL: CategoryPack = CategoryPack {
    category: ProductCategory::Medical,
    risk_level: RiskLevel::High,
    risk_reason: "Medical/PPE often requires conformity documentation and quality certificates.",
    journey_stage: "MEDICAL_COMPLIANCE",
    extra_documents: &[
        "Quality Certificates (ISO, CE/UKCA, etc.)",
        "Product Technical File (if applicable)",
    ],
    warnings: &["Medical/PPE may require conformity markings and additional documentation depending on destination."],
    hs_candidates: &[
        hs("6307", "Other made up textile articles (includes many masks)", Confidence::Medium),
        hs(
            "9018",
            "Instruments and appliances used in medical/surgical sciences",
            Confidence::Low,
        ),
        hs(
            "9020",
            "Breathing appliances and gas masks (excluding protective masks without mechanical parts)",
            Confidence::Low,
        ),
    ],
    hs_rationale: "Matched medical keywords; confirm conformity and intended use.",
};

static DETAILS_NEEDED: CategoryPack = CategoryPack {
    category: ProductCategory::Unknown,
    risk_level: RiskLevel::Medium,
    risk_reason: "Not enough details to classify confidently. Provide composition/material/use.",
    journey_stage: "DETAILS_NEEDED",
    extra_documents: &["Detailed Product Description (use, composition, processing)"],
    warnings: &["More product details needed to classify correctly (composition, use, processing, materials)."],
    hs_candidates: &[],
    hs_rationale: GENERIC_HS_RATIONALE,
};

/// Look up the pack for a category. Total over [`ProductCategory`].
pub fn resolve_pack(category: ProductCategory) -> &'static CategoryPack {
    match category {
        ProductCategory::Textile => &TEXTILE,
        ProductCategory::Spices => &SPICES,
        ProductCategory::Food => &FOOD,
        ProductCategory::Machinery => &MACHINERY,
        ProductCategory::Chemicals => &CHEMICALS,
        ProductCategory::Electronics => &ELECTRONICS,
        ProductCategory::Furniture => &FURNITURE,
        ProductCategory::Cosmetics => &COSMETICS,
        ProductCategory::Medical => &MEDICAL,
        ProductCategory::Unknown => &DETAILS_NEEDED,
    }
}
