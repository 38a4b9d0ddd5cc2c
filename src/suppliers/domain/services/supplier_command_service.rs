use async_trait::async_trait;

use crate::suppliers::domain::model::{
    commands::{
        create_supplier_command::CreateSupplierCommand,
        delete_supplier_command::DeleteSupplierCommand,
        update_supplier_command::UpdateSupplierCommand,
    },
    entities::supplier::Supplier,
    enums::supplier_domain_error::SupplierDomainError,
};

#[async_trait]
pub trait SupplierCommandService: Send + Sync {
    async fn handle_create(
        &self,
        command: CreateSupplierCommand,
    ) -> Result<Supplier, SupplierDomainError>;

    async fn handle_update(
        &self,
        command: UpdateSupplierCommand,
    ) -> Result<Supplier, SupplierDomainError>;

    async fn handle_delete(&self, command: DeleteSupplierCommand)
    -> Result<(), SupplierDomainError>;
}
