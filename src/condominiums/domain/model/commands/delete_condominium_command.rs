use crate::condominiums::domain::model::{
    enums::condominium_domain_error::CondominiumDomainError,
    value_objects::condominium_id::CondominiumId,
};

#[derive(Clone, Debug)]
pub struct DeleteCondominiumCommand {
    condominium_id: CondominiumId,
}

impl DeleteCondominiumCommand {
    pub fn new(condominium_id: String) -> Result<Self, CondominiumDomainError> {
        Ok(Self {
            condominium_id: CondominiumId::new(condominium_id)?,
        })
    }

    pub fn condominium_id(&self) -> &CondominiumId {
        &self.condominium_id
    }
}
