use std::borrow::Cow;

use validator::ValidationError;

use crate::fiscal_identity::domain::{
    model::enums::tax_identification_number_error::TaxIdentificationNumberError,
    services::nif_checksum_validator::check_nif,
};

/// Two-stage rule for `#[validate(custom(...))]` on request resources.
///
/// The format stage short-circuits, so a field carries either a
/// `nif_format` or a `nif_checksum` error, never both.
pub fn validate_tax_identification_number(value: &str) -> Result<(), ValidationError> {
    match TaxIdentificationNumberError::from_verdict(check_nif(value)) {
        None => Ok(()),
        Some(error) => {
            let mut validation_error = ValidationError::new(error.code());
            validation_error.message = Some(Cow::Owned(error.to_string()));
            Err(validation_error)
        }
    }
}
