use std::sync::Arc;

use axum::{Json, extract::State};
use condoflow_api::fiscal_identity::{
    application::query_services::nif_verification_query_service_impl::NifVerificationQueryServiceImpl,
    interfaces::rest::{
        controllers::fiscal_identity_rest_controller::{
            FiscalIdentityRestControllerState, verify_nif,
        },
        resources::nif_verification_resource::VerifyNifRequestResource,
    },
};

fn state() -> FiscalIdentityRestControllerState {
    FiscalIdentityRestControllerState {
        query_service: Arc::new(NifVerificationQueryServiceImpl::new()),
    }
}

async fn verify(nif: &str) -> (bool, String, Option<String>) {
    let Json(response) = verify_nif(
        State(state()),
        Json(VerifyNifRequestResource {
            nif: nif.to_string(),
        }),
    )
    .await;

    assert_eq!(response.nif, nif);
    (response.valid, response.verdict, response.message)
}

#[tokio::test]
async fn verify_nif_accepts_identifier_with_matching_check_digit() {
    let (valid, verdict, message) = verify("123456789").await;

    assert!(valid);
    assert_eq!(verdict, "valid");
    assert_eq!(message, None);
}

#[tokio::test]
async fn verify_nif_reports_checksum_mismatch() {
    let (valid, verdict, message) = verify("123456780").await;

    assert!(!valid);
    assert_eq!(verdict, "bad_checksum");
    assert_eq!(message.as_deref(), Some("invalid identifier checksum"));
}

#[tokio::test]
async fn verify_nif_keeps_leading_digit_reason_but_uses_checksum_message() {
    let (valid, verdict, message) = verify("423456789").await;

    assert!(!valid);
    assert_eq!(verdict, "bad_leading_digit");
    assert_eq!(message.as_deref(), Some("invalid identifier checksum"));
}

#[tokio::test]
async fn verify_nif_reports_format_errors() {
    for candidate in ["12345678", "12345678a", ""] {
        let (valid, verdict, message) = verify(candidate).await;

        assert!(!valid, "{candidate:?}");
        assert_eq!(verdict, "bad_format", "{candidate:?}");
        assert_eq!(message.as_deref(), Some("must be 9 digits"), "{candidate:?}");
    }
}

#[tokio::test]
async fn verify_nif_response_uses_null_message_when_valid() {
    let Json(response) = verify_nif(
        State(state()),
        Json(VerifyNifRequestResource {
            nif: "501442600".to_string(),
        }),
    )
    .await;

    assert_eq!(
        serde_json::to_value(response).expect("serializable response"),
        serde_json::json!({
            "nif": "501442600",
            "valid": true,
            "verdict": "valid",
            "message": null
        })
    );
}
