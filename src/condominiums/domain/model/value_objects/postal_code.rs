use lazy_static::lazy_static;
use regex::Regex;

use crate::condominiums::domain::model::enums::condominium_domain_error::CondominiumDomainError;

lazy_static! {
    static ref POSTAL_CODE_REGEX: Regex =
        Regex::new(r"^[0-9]{4}-[0-9]{3}$").expect("valid regex");
}

/// Portuguese CP4-CP3 postal code.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostalCode(String);

impl PostalCode {
    pub fn new(value: String) -> Result<Self, CondominiumDomainError> {
        let trimmed = value.trim();

        if !POSTAL_CODE_REGEX.is_match(trimmed) {
            return Err(CondominiumDomainError::InvalidPostalCode);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
