use crate::suppliers::domain::model::enums::supplier_domain_error::SupplierDomainError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SupplierName(String);

impl SupplierName {
    pub fn new(value: String) -> Result<Self, SupplierDomainError> {
        let trimmed = value.trim();
        let length = trimmed.chars().count();

        if !(2..=120).contains(&length) {
            return Err(SupplierDomainError::InvalidSupplierName);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
