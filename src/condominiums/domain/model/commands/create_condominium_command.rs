use crate::condominiums::domain::model::{
    enums::condominium_domain_error::CondominiumDomainError,
    value_objects::condominium_details::{CondominiumDetails, CondominiumDetailsParts},
};

#[derive(Clone, Debug)]
pub struct CreateCondominiumCommand {
    details: CondominiumDetails,
}

impl CreateCondominiumCommand {
    pub fn new(parts: CondominiumDetailsParts) -> Result<Self, CondominiumDomainError> {
        Ok(Self {
            details: CondominiumDetails::new(parts)?,
        })
    }

    pub fn details(&self) -> &CondominiumDetails {
        &self.details
    }
}
