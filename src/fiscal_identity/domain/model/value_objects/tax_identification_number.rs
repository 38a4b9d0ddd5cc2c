use std::fmt;

use crate::fiscal_identity::domain::{
    model::enums::tax_identification_number_error::TaxIdentificationNumberError,
    services::nif_checksum_validator::check_nif,
};

/// A NIF that passed both the format and the check-digit stage.
///
/// The raw value is kept as sent; no trimming or separator stripping.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TaxIdentificationNumber(String);

impl TaxIdentificationNumber {
    pub fn new(value: String) -> Result<Self, TaxIdentificationNumberError> {
        match TaxIdentificationNumberError::from_verdict(check_nif(&value)) {
            Some(error) => Err(error),
            None => Ok(Self(value)),
        }
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaxIdentificationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
