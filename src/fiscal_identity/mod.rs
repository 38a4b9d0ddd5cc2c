use std::sync::Arc;

use axum::Router;

use crate::fiscal_identity::{
    application::query_services::nif_verification_query_service_impl::NifVerificationQueryServiceImpl,
    interfaces::rest::controllers::fiscal_identity_rest_controller::{
        FiscalIdentityRestControllerState, router,
    },
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_fiscal_identity_router() -> Router {
    let query_service = Arc::new(NifVerificationQueryServiceImpl::new());

    router(FiscalIdentityRestControllerState { query_service })
}
