use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct VerifyNifRequestResource {
    pub nif: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct NifVerificationResource {
    pub nif: String,
    pub valid: bool,
    /// One of `valid`, `bad_format`, `bad_leading_digit`, `bad_checksum`.
    pub verdict: String,
    pub message: Option<String>,
}
