use std::fmt;

use uuid::Uuid;

use crate::condominiums::domain::model::enums::condominium_domain_error::CondominiumDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CondominiumId(Uuid);

impl CondominiumId {
    pub fn new(value: String) -> Result<Self, CondominiumDomainError> {
        let parsed = Uuid::parse_str(value.trim())
            .map_err(|_| CondominiumDomainError::InvalidCondominiumId)?;
        Ok(Self(parsed))
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn new_random() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for CondominiumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
