use axum::response::Response;
use serde_json::Value;

use crate::workflows::export_check::{classify_export_readiness, ExportReadinessResponse};

pub(super) const PRODUCTS: &[&str] = &[
    "cotton t-shirt",
    "Men's Shirt",
    "turmeric powder",
    "garam masala blend",
    "roasted makhana snack",
    "industrial gearbox",
    "paint thinner solvent",
    "Bluetooth speaker",
    "solid wood dining table",
    "herbal shampoo",
    "surgical mask",
    "stainless steel water bottle",
    "xyz unclassifiable widget 123",
    "",
];

pub(super) const COUNTRIES: &[&str] = &[
    "UK",
    "U.K.",
    "United Kingdom",
    "Germany",
    "France",
    "UAE",
    "India",
    "Atlantis",
];

pub(super) const EXPERIENCES: &[&str] = &["beginner", "intermediate", "expert"];

pub(super) fn check(product: &str, country: &str, experience: &str) -> ExportReadinessResponse {
    classify_export_readiness(product, country, experience).expect("valid export query")
}

/// Every valid combination of the sample inputs.
pub(super) fn all_responses() -> Vec<ExportReadinessResponse> {
    let mut responses = Vec::new();
    for product in PRODUCTS.iter().filter(|product| !product.is_empty()) {
        for country in COUNTRIES {
            for experience in EXPERIENCES {
                responses.push(check(product, country, experience));
            }
        }
    }
    responses
}

pub(super) fn contains(list: &[String], item: &str) -> bool {
    list.iter().any(|entry| entry == item)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
