use thiserror::Error;

use crate::fiscal_identity::domain::model::enums::tax_identification_number_error::TaxIdentificationNumberError;

#[derive(Debug, Error)]
pub enum CondominiumDomainError {
    #[error("condominium id is invalid")]
    InvalidCondominiumId,

    #[error("condominium name is invalid; length must be 2..120")]
    InvalidCondominiumName,

    #[error("nif: {0}")]
    InvalidTaxIdentificationNumber(#[from] TaxIdentificationNumberError),

    #[error("address is required and limited to 255 characters")]
    InvalidAddress,

    #[error("postal code must look like 1000-001")]
    InvalidPostalCode,

    #[error("city is required and limited to 120 characters")]
    InvalidCity,

    #[error("condominium not found")]
    CondominiumNotFound,

    #[error("another condominium is already registered with this nif")]
    DuplicateTaxIdentificationNumber,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
