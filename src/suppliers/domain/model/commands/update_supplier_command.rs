use crate::suppliers::domain::model::{
    enums::supplier_domain_error::SupplierDomainError,
    value_objects::{
        supplier_details::{SupplierDetails, SupplierDetailsParts},
        supplier_id::SupplierId,
    },
};

#[derive(Clone, Debug)]
pub struct UpdateSupplierCommand {
    supplier_id: SupplierId,
    details: SupplierDetails,
}

impl UpdateSupplierCommand {
    pub fn new(
        supplier_id: String,
        parts: SupplierDetailsParts,
    ) -> Result<Self, SupplierDomainError> {
        Ok(Self {
            supplier_id: SupplierId::new(supplier_id)?,
            details: SupplierDetails::new(parts)?,
        })
    }

    pub fn supplier_id(&self) -> &SupplierId {
        &self.supplier_id
    }

    pub fn details(&self) -> &SupplierDetails {
        &self.details
    }
}
