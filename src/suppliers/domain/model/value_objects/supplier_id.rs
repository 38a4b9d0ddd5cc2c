use std::fmt;

use uuid::Uuid;

use crate::suppliers::domain::model::enums::supplier_domain_error::SupplierDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SupplierId(Uuid);

impl SupplierId {
    pub fn new(value: String) -> Result<Self, SupplierDomainError> {
        let parsed =
            Uuid::parse_str(value.trim()).map_err(|_| SupplierDomainError::InvalidSupplierId)?;
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

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
