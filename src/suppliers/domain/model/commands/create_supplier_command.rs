use crate::suppliers::domain::model::{
    enums::supplier_domain_error::SupplierDomainError,
    value_objects::supplier_details::{SupplierDetails, SupplierDetailsParts},
};

#[derive(Clone, Debug)]
pub struct CreateSupplierCommand {
    details: SupplierDetails,
}

impl CreateSupplierCommand {
    pub fn new(parts: SupplierDetailsParts) -> Result<Self, SupplierDomainError> {
        Ok(Self {
            details: SupplierDetails::new(parts)?,
        })
    }

    pub fn details(&self) -> &SupplierDetails {
        &self.details
    }
}
