use crate::fiscal_identity::domain::model::{
    entities::nif_verification::NifVerification, queries::verify_nif_query::VerifyNifQuery,
};

pub trait NifVerificationQueryService: Send + Sync {
    fn handle_verify(&self, query: VerifyNifQuery) -> NifVerification;
}
