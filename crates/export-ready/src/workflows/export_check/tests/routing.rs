use axum::http::{header, Request, StatusCode};
use axum::Json;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::export_check::router::export_check_handler;
use crate::workflows::export_check::{export_check_router, ExportCheckRequest};

#[tokio::test]
async fn handler_returns_full_response() {
    let request = ExportCheckRequest {
        product: Some("cotton t-shirt".to_string()),
        country: Some("UK".to_string()),
        experience: Some("beginner".to_string()),
    };

    let Json(body) = export_check_handler(Ok(Json(request)))
        .await
        .expect("check succeeds");

    assert!(body.allowed);
    assert_eq!(body.hs_code_suggestions.len(), 3);
}

#[tokio::test]
async fn route_serializes_snake_case_payload() {
    let response = export_check_router()
        .oneshot(
            Request::post("/api/export-check")
                .header(header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    json!({
                        "product": "turmeric powder",
                        "country": "Germany",
                        "experience": "expert",
                    })
                    .to_string(),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["product_category"], json!("spices"));
    assert_eq!(payload["risk_level"], json!("MEDIUM"));
    assert_eq!(payload["recommended_incoterm"], json!("FOB"));
    assert_eq!(payload["experience"], json!("expert"));
    assert!(payload["next_steps"].is_array());
    assert_eq!(payload["hs_code_suggestions"][1]["confidence"], json!("HIGH"));
}

#[tokio::test]
async fn route_rejects_missing_fields_with_bad_request() {
    let response = export_check_router()
        .oneshot(
            Request::post("/api/export-check")
                .header(header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    json!({ "product": "tea", "experience": "beginner" }).to_string(),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], json!("country is required"));
}

async fn post_raw(content_type: Option<&str>, body: &str) -> axum::response::Response {
    let mut request = Request::post("/api/export-check");
    if let Some(content_type) = content_type {
        request = request.header(header::CONTENT_TYPE, content_type);
    }
    export_check_router()
        .oneshot(
            request
                .body(axum::body::Body::from(body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("route executes")
}

#[tokio::test]
async fn missing_content_type_is_a_json_bad_request() {
    let body = json!({ "product": "tea", "country": "UK", "experience": "beginner" }).to_string();
    let response = post_raw(None, &body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.contains("Content-Type")));
}

#[tokio::test]
async fn mistyped_and_malformed_bodies_are_json_bad_requests() {
    let mistyped = json!({ "product": 5, "country": "UK", "experience": "beginner" }).to_string();
    for body in [mistyped.as_str(), "{not json"] {
        let response = post_raw(Some("application/json"), body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        let payload = read_json_body(response).await;
        assert!(payload["error"].is_string(), "{body}");
    }
}
