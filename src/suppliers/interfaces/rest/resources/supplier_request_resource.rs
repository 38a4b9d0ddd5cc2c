use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::{
    fiscal_identity::interfaces::rest::validators::tax_identification_number_validator::validate_tax_identification_number,
    suppliers::domain::model::{
        enums::supplier_domain_error::SupplierDomainError,
        value_objects::{
            email_address::EmailAddress,
            phone_number::PhoneNumber,
            supplier_details::{MAX_ADDRESS_LENGTH, MAX_NOTES_LENGTH, SupplierDetailsParts},
            supplier_name::SupplierName,
        },
    },
};

/// Body of both create and update; updates replace every editable field.
///
/// Blank optional fields count as absent, the same way the domain reads them.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct SupplierRequestResource {
    #[validate(custom(function = "validate_supplier_name"))]
    pub name: String,

    #[validate(custom(function = "validate_tax_identification_number"))]
    pub nif: String,

    #[validate(custom(function = "validate_optional_email"))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_optional_phone"))]
    pub phone: Option<String>,

    pub category: String,

    #[validate(custom(function = "validate_optional_address"))]
    pub address: Option<String>,

    #[validate(custom(function = "validate_optional_notes"))]
    pub notes: Option<String>,
}

impl SupplierRequestResource {
    pub fn into_parts(self) -> SupplierDetailsParts {
        SupplierDetailsParts {
            name: self.name,
            nif: self.nif,
            email: self.email,
            phone: self.phone,
            category: self.category,
            address: self.address,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct ListSuppliersQueryResource {
    pub search: Option<String>,
    pub category: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

fn validate_supplier_name(name: &str) -> Result<(), ValidationError> {
    SupplierName::new(name.to_string())
        .map(|_| ())
        .map_err(|error| rejection("length", error))
}

fn validate_optional_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Ok(());
    }

    EmailAddress::new(email.to_string())
        .map(|_| ())
        .map_err(|error| rejection("email", error))
}

fn validate_optional_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.trim().is_empty() {
        return Ok(());
    }

    PhoneNumber::new(phone.to_string())
        .map(|_| ())
        .map_err(|error| rejection("phone", error))
}

fn validate_optional_address(address: &str) -> Result<(), ValidationError> {
    if address.trim().chars().count() > MAX_ADDRESS_LENGTH {
        return Err(rejection("length", SupplierDomainError::InvalidSupplierAddress));
    }
    Ok(())
}

fn validate_optional_notes(notes: &str) -> Result<(), ValidationError> {
    if notes.trim().chars().count() > MAX_NOTES_LENGTH {
        return Err(rejection("length", SupplierDomainError::InvalidSupplierNotes));
    }
    Ok(())
}

fn rejection(code: &'static str, error: SupplierDomainError) -> ValidationError {
    let mut validation_error = ValidationError::new(code);
    validation_error.message = Some(Cow::Owned(error.to_string()));
    validation_error
}
