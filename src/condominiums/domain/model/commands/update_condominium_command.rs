use crate::condominiums::domain::model::{
    enums::condominium_domain_error::CondominiumDomainError,
    value_objects::{
        condominium_details::{CondominiumDetails, CondominiumDetailsParts},
        condominium_id::CondominiumId,
    },
};

#[derive(Clone, Debug)]
pub struct UpdateCondominiumCommand {
    condominium_id: CondominiumId,
    details: CondominiumDetails,
}

impl UpdateCondominiumCommand {
    pub fn new(
        condominium_id: String,
        parts: CondominiumDetailsParts,
    ) -> Result<Self, CondominiumDomainError> {
        Ok(Self {
            condominium_id: CondominiumId::new(condominium_id)?,
            details: CondominiumDetails::new(parts)?,
        })
    }

    pub fn condominium_id(&self) -> &CondominiumId {
        &self.condominium_id
    }

    pub fn details(&self) -> &CondominiumDetails {
        &self.details
    }
}
