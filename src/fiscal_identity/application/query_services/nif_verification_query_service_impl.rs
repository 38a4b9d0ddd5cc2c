use tracing::debug;

use crate::fiscal_identity::domain::{
    model::{entities::nif_verification::NifVerification, queries::verify_nif_query::VerifyNifQuery},
    services::{
        nif_checksum_validator::check_nif,
        nif_verification_query_service::NifVerificationQueryService,
    },
};

#[derive(Clone, Copy, Debug, Default)]
pub struct NifVerificationQueryServiceImpl;

impl NifVerificationQueryServiceImpl {
    pub fn new() -> Self {
        Self
    }
}

impl NifVerificationQueryService for NifVerificationQueryServiceImpl {
    fn handle_verify(&self, query: VerifyNifQuery) -> NifVerification {
        let verdict = check_nif(query.candidate());
        debug!(verdict = verdict.as_str(), "nif verified");

        NifVerification::new(query.candidate().to_string(), verdict)
    }
}
