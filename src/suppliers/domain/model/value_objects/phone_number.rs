use lazy_static::lazy_static;
use regex::Regex;

use crate::suppliers::domain::model::enums::supplier_domain_error::SupplierDomainError;

lazy_static! {
    static ref PHONE_NUMBER_REGEX: Regex =
        Regex::new(r"^\+?[0-9 ]{9,20}$").expect("valid regex");
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(value: String) -> Result<Self, SupplierDomainError> {
        let trimmed = value.trim();

        if !PHONE_NUMBER_REGEX.is_match(trimmed) {
            return Err(SupplierDomainError::InvalidPhoneNumber);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
