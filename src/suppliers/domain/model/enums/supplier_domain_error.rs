use thiserror::Error;

use crate::fiscal_identity::domain::model::enums::tax_identification_number_error::TaxIdentificationNumberError;

#[derive(Debug, Error)]
pub enum SupplierDomainError {
    #[error("supplier id is invalid")]
    InvalidSupplierId,

    #[error("supplier name is invalid; length must be 2..120")]
    InvalidSupplierName,

    #[error("nif: {0}")]
    InvalidTaxIdentificationNumber(#[from] TaxIdentificationNumberError),

    #[error("email address is invalid")]
    InvalidEmailAddress,

    #[error("phone number is invalid")]
    InvalidPhoneNumber,

    #[error("supplier category is unknown")]
    InvalidSupplierCategory,

    #[error("supplier address exceeds 255 characters")]
    InvalidSupplierAddress,

    #[error("supplier notes exceed 2000 characters")]
    InvalidSupplierNotes,

    #[error("supplier not found")]
    SupplierNotFound,

    #[error("another supplier is already registered with this nif")]
    DuplicateTaxIdentificationNumber,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
