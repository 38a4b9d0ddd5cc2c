use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::{
    condominiums::domain::model::{
        enums::condominium_domain_error::CondominiumDomainError,
        value_objects::{
            condominium_details::{
                CondominiumDetailsParts, MAX_ADDRESS_LENGTH, MAX_CITY_LENGTH, required_text,
            },
            condominium_name::CondominiumName,
            postal_code::PostalCode,
        },
    },
    fiscal_identity::interfaces::rest::validators::tax_identification_number_validator::validate_tax_identification_number,
};

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CondominiumRequestResource {
    #[validate(custom(function = "validate_condominium_name"))]
    pub name: String,

    #[validate(custom(function = "validate_tax_identification_number"))]
    pub nif: String,

    #[validate(custom(function = "validate_address"))]
    pub address: String,

    #[validate(custom(function = "validate_postal_code"))]
    pub postal_code: String,

    #[validate(custom(function = "validate_city"))]
    pub city: String,
}

impl CondominiumRequestResource {
    pub fn into_parts(self) -> CondominiumDetailsParts {
        CondominiumDetailsParts {
            name: self.name,
            nif: self.nif,
            address: self.address,
            postal_code: self.postal_code,
            city: self.city,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct ListCondominiumsQueryResource {
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

fn validate_condominium_name(name: &str) -> Result<(), ValidationError> {
    CondominiumName::new(name.to_string())
        .map(|_| ())
        .map_err(|error| rejection("length", error))
}

fn validate_address(address: &str) -> Result<(), ValidationError> {
    match required_text(address, MAX_ADDRESS_LENGTH) {
        Some(_) => Ok(()),
        None => Err(rejection("length", CondominiumDomainError::InvalidAddress)),
    }
}

fn validate_city(city: &str) -> Result<(), ValidationError> {
    match required_text(city, MAX_CITY_LENGTH) {
        Some(_) => Ok(()),
        None => Err(rejection("length", CondominiumDomainError::InvalidCity)),
    }
}

fn validate_postal_code(postal_code: &str) -> Result<(), ValidationError> {
    PostalCode::new(postal_code.to_string())
        .map(|_| ())
        .map_err(|error| rejection("postal_code", error))
}

fn rejection(code: &'static str, error: CondominiumDomainError) -> ValidationError {
    let mut validation_error = ValidationError::new(code);
    validation_error.message = Some(Cow::Owned(error.to_string()));
    validation_error
}
