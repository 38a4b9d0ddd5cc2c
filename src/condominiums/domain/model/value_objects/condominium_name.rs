use crate::condominiums::domain::model::enums::condominium_domain_error::CondominiumDomainError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CondominiumName(String);

impl CondominiumName {
    pub fn new(value: String) -> Result<Self, CondominiumDomainError> {
        let trimmed = value.trim();
        let length = trimmed.chars().count();

        if !(2..=120).contains(&length) {
            return Err(CondominiumDomainError::InvalidCondominiumName);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
