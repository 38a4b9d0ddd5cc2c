use crate::suppliers::domain::model::{
    enums::supplier_domain_error::SupplierDomainError, value_objects::supplier_id::SupplierId,
};

#[derive(Clone, Debug)]
pub struct DeleteSupplierCommand {
    supplier_id: SupplierId,
}

impl DeleteSupplierCommand {
    pub fn new(supplier_id: String) -> Result<Self, SupplierDomainError> {
        Ok(Self {
            supplier_id: SupplierId::new(supplier_id)?,
        })
    }

    pub fn supplier_id(&self) -> &SupplierId {
        &self.supplier_id
    }
}
