use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use condoflow_api::{
    shared::interfaces::rest::resources::error_response_resource::FieldErrorResource,
    suppliers::interfaces::rest::{
        controllers::supplier_rest_controller::{
            create_supplier, delete_supplier, get_supplier, list_suppliers, update_supplier,
        },
        resources::supplier_request_resource::{ListSuppliersQueryResource, SupplierRequestResource},
    },
};

use crate::support::{
    create_harness,
    fixtures::{CLEANING_NIF, ELEVATOR_NIF},
    registered_supplier,
};

fn request(nif: &str) -> SupplierRequestResource {
    SupplierRequestResource {
        name: "Elevadores Norte".to_string(),
        nif: nif.to_string(),
        email: Some("geral@elevadores.pt".to_string()),
        phone: Some("+351 912 345 678".to_string()),
        category: "elevators".to_string(),
        address: None,
        notes: None,
    }
}

#[tokio::test]
async fn create_supplier_returns_created_resource() {
    let harness = create_harness(vec![]);

    let (status, Json(resource)) =
        create_supplier(State(harness.controller_state()), Json(request(ELEVATOR_NIF)))
            .await
            .expect("request should succeed");

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resource.nif, ELEVATOR_NIF);
    assert_eq!(resource.category, "elevators");
    assert_eq!(harness.repository.len(), 1);
}

#[tokio::test]
async fn create_supplier_rejects_malformed_nif_with_format_error() {
    let harness = create_harness(vec![]);

    let (status, Json(body)) =
        create_supplier(State(harness.controller_state()), Json(request("12345678")))
            .await
            .expect_err("request should be rejected");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.field_errors.len(), 1);
    assert_eq!(body.field_errors[0].field, "nif");
    assert_eq!(body.field_errors[0].code, "nif_format");
    assert_eq!(body.field_errors[0].message, "must be 9 digits");
    assert_eq!(harness.repository.len(), 0);
}

#[tokio::test]
async fn create_supplier_rejects_bad_check_digit_with_checksum_error() {
    let harness = create_harness(vec![]);

    let (status, Json(body)) =
        create_supplier(State(harness.controller_state()), Json(request("123456780")))
            .await
            .expect_err("request should be rejected");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.field_errors.len(), 1);
    assert_eq!(body.field_errors[0].code, "nif_checksum");
    assert_eq!(body.field_errors[0].message, "invalid identifier checksum");
    assert!(harness.repository.saved_ids().is_empty());
}

#[tokio::test]
async fn create_supplier_maps_duplicate_nif_to_conflict() {
    let harness = create_harness(vec![registered_supplier(
        "Limpezas Sul",
        ELEVATOR_NIF,
        "cleaning",
    )]);

    let (status, _) = create_supplier(State(harness.controller_state()), Json(request(ELEVATOR_NIF)))
        .await
        .expect_err("request should be rejected");

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn create_supplier_rejects_unknown_category() {
    let harness = create_harness(vec![]);
    let mut payload = request(ELEVATOR_NIF);
    payload.category = "catering".to_string();

    let (status, Json(body)) = create_supplier(State(harness.controller_state()), Json(payload))
        .await
        .expect_err("request should be rejected");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.message, "supplier category is unknown");
}

#[tokio::test]
async fn update_supplier_validates_nif_before_touching_storage() {
    let existing = registered_supplier("Elevadores Norte", ELEVATOR_NIF, "elevators");
    let harness = create_harness(vec![existing.clone()]);

    let (status, Json(body)) = update_supplier(
        State(harness.controller_state()),
        Path(existing.id().to_string()),
        Json(request("423456789")),
    )
    .await
    .expect_err("request should be rejected");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.field_errors[0].code, "nif_checksum");
    assert!(harness.repository.saved_ids().is_empty());
}

#[tokio::test]
async fn update_supplier_returns_updated_resource() {
    let existing = registered_supplier("Elevadores Norte", ELEVATOR_NIF, "elevators");
    let harness = create_harness(vec![existing.clone()]);

    let Json(resource) = update_supplier(
        State(harness.controller_state()),
        Path(existing.id().to_string()),
        Json(request(CLEANING_NIF)),
    )
    .await
    .expect("request should succeed");

    assert_eq!(resource.id, existing.id().to_string());
    assert_eq!(resource.nif, CLEANING_NIF);
}

#[tokio::test]
async fn get_and_delete_supplier_map_missing_rows_to_not_found() {
    let harness = create_harness(vec![]);
    let missing_id = "0190b6a4-8c52-7d5e-9f00-4a2b3c4d5e6f".to_string();

    let (get_status, _) = get_supplier(State(harness.controller_state()), Path(missing_id.clone()))
        .await
        .expect_err("request should be rejected");
    let (delete_status, _) = delete_supplier(State(harness.controller_state()), Path(missing_id))
        .await
        .expect_err("request should be rejected");

    assert_eq!(get_status, StatusCode::NOT_FOUND);
    assert_eq!(delete_status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_supplier_rejects_malformed_id() {
    let harness = create_harness(vec![]);

    let (status, _) = get_supplier(
        State(harness.controller_state()),
        Path("not-a-uuid".to_string()),
    )
    .await
    .expect_err("request should be rejected");

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_suppliers_applies_query_parameters() {
    let harness = create_harness(vec![
        registered_supplier("Elevadores Norte", ELEVATOR_NIF, "elevators"),
        registered_supplier("Limpezas Sul", CLEANING_NIF, "cleaning"),
    ]);

    let Json(resources) = list_suppliers(
        State(harness.controller_state()),
        Query(ListSuppliersQueryResource {
            category: Some("cleaning".to_string()),
            ..ListSuppliersQueryResource::default()
        }),
    )
    .await
    .expect("request should succeed");

    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].name, "Limpezas Sul");
}

#[tokio::test]
async fn create_supplier_treats_blank_optional_fields_as_absent() {
    let harness = create_harness(vec![]);
    let mut payload = request(ELEVATOR_NIF);
    payload.email = Some(String::new());
    payload.phone = Some("   ".to_string());
    payload.notes = Some(" ".to_string());

    let (status, Json(resource)) = create_supplier(State(harness.controller_state()), Json(payload))
        .await
        .expect("request should succeed");

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resource.email, None);
    assert_eq!(resource.phone, None);
    assert_eq!(resource.notes, None);
}

#[tokio::test]
async fn create_supplier_measures_the_trimmed_name() {
    let harness = create_harness(vec![]);
    let mut padded = request(ELEVATOR_NIF);
    padded.name = format!("  {}  ", "E".repeat(120));

    let (status, Json(resource)) = create_supplier(State(harness.controller_state()), Json(padded))
        .await
        .expect("request should succeed");

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resource.name.chars().count(), 120);

    let mut short = request(CLEANING_NIF);
    short.name = " A ".to_string();

    let (status, Json(body)) = create_supplier(State(harness.controller_state()), Json(short))
        .await
        .expect_err("request should be rejected");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.field_errors,
        vec![FieldErrorResource::new(
            "name",
            "length",
            "supplier name is invalid; length must be 2..120"
        )]
    );
}

#[tokio::test]
async fn create_supplier_reports_malformed_contact_fields() {
    let harness = create_harness(vec![]);
    let mut payload = request(ELEVATOR_NIF);
    payload.email = Some("geral@".to_string());
    payload.phone = Some("12-34".to_string());

    let (status, Json(body)) = create_supplier(State(harness.controller_state()), Json(payload))
        .await
        .expect_err("request should be rejected");

    let fields: Vec<(&str, &str)> = body
        .field_errors
        .iter()
        .map(|error| (error.field.as_str(), error.code.as_str()))
        .collect();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(fields, vec![("email", "email"), ("phone", "phone")]);
    assert_eq!(harness.repository.len(), 0);
}
