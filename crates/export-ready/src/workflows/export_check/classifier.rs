use super::domain::ProductCategory;

/// Keyword groups in precedence order. Substring matching, first group wins.
const KEYWORD_GROUPS: &[(ProductCategory, &[&str])] = &[
    (
        ProductCategory::Spices,
        &[
            "spice", "spices", "masala", "turmeric", "haldi", "chilli", "chili", "pepper",
            "cumin", "jeera", "coriander", "dhania",
        ],
    ),
    (
        ProductCategory::Textile,
        &[
            "t-shirt", "tshirt", "tee", "shirt", "hoodie", "sweater", "cotton", "garment",
            "clothing", "apparel", "textile", "fabric",
        ],
    ),
    (
        ProductCategory::Food,
        &["food", "snack", "makhana", "fox nut", "nuts", "dry fruit"],
    ),
    (
        ProductCategory::Machinery,
        &[
            "machine", "machinery", "cnc", "gear", "bearing", "spare", "part", "valve", "pump",
            "motor", "compressor",
        ],
    ),
    (
        ProductCategory::Chemicals,
        &[
            "solvent", "chemical", "cleaner", "acid", "alkali", "detergent", "paint", "adhesive",
            "resin", "flammable", "hazard",
        ],
    ),
    (
        ProductCategory::Electronics,
        &[
            "bluetooth", "speaker", "headphone", "earphone", "charger", "battery", "electronics",
            "pcb", "circuit", "wireless", "radio",
        ],
    ),
    (
        ProductCategory::Furniture,
        &[
            "table", "chair", "sofa", "furniture", "wood", "timber", "cabinet", "bed", "dining",
        ],
    ),
    (
        ProductCategory::Cosmetics,
        &[
            "cosmetic", "cream", "lotion", "skincare", "skin care", "makeup", "shampoo", "soap",
            "beauty",
        ],
    ),
    (
        ProductCategory::Medical,
        &[
            "mask", "surgical", "medical", "ppe", "glove", "bandage", "thermometer", "diagnostic",
        ],
    ),
];

/// Terms that pin the knitted T-shirt heading regardless of category.
const TSHIRT_KEYWORDS: &[&str] = &["t-shirt", "tshirt", "tee"];

/// Map free product text to exactly one category. Never fails.
pub fn classify(product: &str) -> ProductCategory {
    let text = product.to_lowercase();
    KEYWORD_GROUPS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(ProductCategory::Unknown)
}

pub(crate) fn mentions_tshirt(product: &str) -> bool {
    let text = product.to_lowercase();
    TSHIRT_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}
