use crate::{
    condominiums::domain::model::{
        enums::condominium_domain_error::CondominiumDomainError,
        value_objects::{condominium_name::CondominiumName, postal_code::PostalCode},
    },
    fiscal_identity::domain::model::value_objects::tax_identification_number::TaxIdentificationNumber,
};

pub const MAX_ADDRESS_LENGTH: usize = 255;
pub const MAX_CITY_LENGTH: usize = 120;

/// Trimmed `value` when it is non-empty and at most `max_length` characters.
pub fn required_text(value: &str, max_length: usize) -> Option<String> {
    let trimmed = value.trim();
    let length = trimmed.chars().count();

    (1..=max_length)
        .contains(&length)
        .then(|| trimmed.to_string())
}

#[derive(Clone, Debug)]
pub struct CondominiumDetailsParts {
    pub name: String,
    pub nif: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CondominiumDetails {
    name: CondominiumName,
    nif: TaxIdentificationNumber,
    address: String,
    postal_code: PostalCode,
    city: String,
}

impl CondominiumDetails {
    pub fn new(parts: CondominiumDetailsParts) -> Result<Self, CondominiumDomainError> {
        let address = required_text(&parts.address, MAX_ADDRESS_LENGTH)
            .ok_or(CondominiumDomainError::InvalidAddress)?;
        let city =
            required_text(&parts.city, MAX_CITY_LENGTH).ok_or(CondominiumDomainError::InvalidCity)?;

        Ok(Self {
            name: CondominiumName::new(parts.name)?,
            nif: TaxIdentificationNumber::new(parts.nif)?,
            address,
            postal_code: PostalCode::new(parts.postal_code)?,
            city,
        })
    }

    pub fn name(&self) -> &CondominiumName {
        &self.name
    }

    pub fn nif(&self) -> &TaxIdentificationNumber {
        &self.nif
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}
