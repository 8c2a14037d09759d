use super::common::*;
use crate::identity::AuthError;
use crate::workflows::reports::{
    ReportId, ReportRepository, ReportServiceError, RepositoryError, REPORT_SCHEMA_VERSION,
};
use serde_json::json;
use std::sync::Arc;

#[test]
fn save_copies_headline_fields_from_result() {
    let (service, repository) = build_service(50);

    let record = service
        .save(&owner(), save_request("Organic Spices"))
        .expect("report saved");

    assert!(record.id.0.starts_with("rpt-"));
    assert_eq!(record.schema_version, REPORT_SCHEMA_VERSION);
    assert_eq!(record.user_id, "user-owner");
    assert_eq!(record.email, "owner@example.com");
    assert_eq!(record.hs_code, "0904");
    assert_eq!(record.risk_level, "MEDIUM");
    assert_eq!(record.incoterm, "DAP");
    assert_eq!(record.journey_stage, "UK_FOOD_COMPLIANCE");

    let stored = repository
        .fetch("user-owner", &record.id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored, record);
}

#[test]
fn save_rejects_incomplete_payloads() {
    let (service, repository) = build_service(50);

    let mut missing_result = save_request("Cotton Shirt");
    missing_result.result = None;
    let mut blank_country = save_request("Cotton Shirt");
    blank_country.country = Some("   ".to_string());
    let mut empty_hs = save_request("Cotton Shirt");
    empty_hs.locked_hs = Some(Default::default());

    for request in [missing_result, blank_country, empty_hs] {
        match service.save(&owner(), request) {
            Err(ReportServiceError::InvalidReport(message)) => {
                assert_eq!(message, "Missing required report data")
            }
            other => panic!("expected invalid report, got {other:?}"),
        }
    }
    assert!(repository.records.lock().expect("poisoned").is_empty());
}

#[test]
fn missing_result_fields_default_to_empty() {
    let (service, _) = build_service(50);
    let mut request = save_request("Cotton Shirt");
    request.result = Some(json!({ "note": "hand-edited" }));

    let record = service.save(&owner(), request).expect("saved");
    assert_eq!(record.risk_level, "");
    assert_eq!(record.incoterm, "");
    assert_eq!(record.journey_stage, "");
}

#[test]
fn list_is_scoped_newest_first_and_capped() {
    let (service, _) = build_service(2);

    let first = service.save(&owner(), save_request("Cotton Shirt")).expect("saved");
    let second = service.save(&owner(), save_request("Cardamom")).expect("saved");
    let third = service.save(&owner(), save_request("Teak Chair")).expect("saved");
    service
        .save(&other_user(), save_request("Rice"))
        .expect("saved");

    let listed = service.list(&owner()).expect("list succeeds");
    let ids: Vec<ReportId> = listed.into_iter().map(|summary| summary.id).collect();
    assert_eq!(ids, vec![third.id, second.id]);
    assert!(!ids.contains(&first.id));
}

#[test]
fn reports_are_invisible_to_other_users() {
    let (service, _) = build_service(50);
    let record = service.save(&owner(), save_request("Cotton Shirt")).expect("saved");

    match service.get(&other_user(), &record.id) {
        Err(ReportServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
    match service.delete(&other_user(), &record.id) {
        Err(ReportServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
    assert!(service.get(&owner(), &record.id).is_ok());
}

#[test]
fn delete_removes_the_report() {
    let (service, _) = build_service(50);
    let record = service.save(&owner(), save_request("Cotton Shirt")).expect("saved");

    let deleted = service.delete(&owner(), &record.id).expect("deleted");
    assert_eq!(deleted, record.id);
    assert!(service.get(&owner(), &record.id).is_err());
    assert!(service.delete(&owner(), &record.id).is_err());
}

#[test]
fn authenticate_distinguishes_missing_and_unknown_tokens() {
    let (service, _) = build_service(50);

    assert_eq!(
        service.authenticate(OWNER_TOKEN).expect("known token"),
        owner()
    );
    assert!(matches!(
        service.authenticate(""),
        Err(ReportServiceError::Auth(AuthError::MissingToken))
    ));
    assert!(matches!(
        service.authenticate("expired"),
        Err(ReportServiceError::Auth(AuthError::InvalidToken))
    ));
}

#[test]
fn repository_failures_propagate() {
    let service = crate::workflows::reports::ReportService::new(
        Arc::new(UnavailableRepository),
        Arc::new(verifier()),
        &crate::config::ReportsConfig::default(),
    );

    assert!(matches!(
        service.save(&owner(), save_request("Cotton Shirt")),
        Err(ReportServiceError::Repository(RepositoryError::Unavailable(_)))
    ));
    assert!(matches!(
        service.list(&owner()),
        Err(ReportServiceError::Repository(RepositoryError::Unavailable(_)))
    ));
}
