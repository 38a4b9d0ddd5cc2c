use lazy_static::lazy_static;
use regex::Regex;

use crate::suppliers::domain::model::enums::supplier_domain_error::SupplierDomainError;

lazy_static! {
    static ref EMAIL_ADDRESS_REGEX: Regex =
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex");
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: String) -> Result<Self, SupplierDomainError> {
        let normalized = value.trim().to_lowercase();

        if normalized.len() > 255 || !EMAIL_ADDRESS_REGEX.is_match(&normalized) {
            return Err(SupplierDomainError::InvalidEmailAddress);
        }

        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
