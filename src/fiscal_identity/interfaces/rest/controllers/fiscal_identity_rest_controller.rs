use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};

use crate::fiscal_identity::{
    domain::{
        model::queries::verify_nif_query::VerifyNifQuery,
        services::nif_verification_query_service::NifVerificationQueryService,
    },
    interfaces::rest::resources::nif_verification_resource::{
        NifVerificationResource, VerifyNifRequestResource,
    },
};

#[derive(Clone)]
pub struct FiscalIdentityRestControllerState {
    pub query_service: Arc<dyn NifVerificationQueryService>,
}

pub fn router(state: FiscalIdentityRestControllerState) -> Router {
    Router::new()
        .route("/fiscal-identity/nif/verifications", post(verify_nif))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/fiscal-identity/nif/verifications",
    tag = "fiscal-identity",
    request_body = VerifyNifRequestResource,
    responses(
        (status = 200, description = "Verification verdict for the candidate NIF", body = NifVerificationResource)
    )
)]
pub async fn verify_nif(
    State(state): State<FiscalIdentityRestControllerState>,
    Json(request): Json<VerifyNifRequestResource>,
) -> Json<NifVerificationResource> {
    let verification = state
        .query_service
        .handle_verify(VerifyNifQuery::new(request.nif));

    Json(NifVerificationResource {
        nif: verification.candidate().to_string(),
        valid: verification.is_valid(),
        verdict: verification.verdict().as_str().to_string(),
        message: verification.rejection().map(|error| error.to_string()),
    })
}
