pub mod nif_checksum_validator;
pub mod nif_verification_query_service;
