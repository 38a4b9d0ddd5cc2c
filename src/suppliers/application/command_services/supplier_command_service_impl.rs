use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::suppliers::{
    domain::{
        model::{
            commands::{
                create_supplier_command::CreateSupplierCommand,
                delete_supplier_command::DeleteSupplierCommand,
                update_supplier_command::UpdateSupplierCommand,
            },
            entities::supplier::Supplier,
            enums::supplier_domain_error::SupplierDomainError,
        },
        services::supplier_command_service::SupplierCommandService,
    },
    infrastructure::persistence::repositories::supplier_repository::SupplierRepository,
};

pub struct SupplierCommandServiceImpl {
    repository: Arc<dyn SupplierRepository>,
}

impl SupplierCommandServiceImpl {
    pub fn new(repository: Arc<dyn SupplierRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SupplierCommandService for SupplierCommandServiceImpl {
    async fn handle_create(
        &self,
        command: CreateSupplierCommand,
    ) -> Result<Supplier, SupplierDomainError> {
        let nif = command.details().nif();
        if self.repository.find_by_nif(nif).await?.is_some() {
            warn!(nif = nif.value(), "supplier registration rejected: nif already in use");
            return Err(SupplierDomainError::DuplicateTaxIdentificationNumber);
        }

        let supplier = Supplier::register(command.details().clone(), Utc::now());
        self.repository.insert(&supplier).await?;

        info!(
            supplier_id = %supplier.id(),
            category = supplier.details().category().as_str(),
            "supplier registered"
        );
        Ok(supplier)
    }

    async fn handle_update(
        &self,
        command: UpdateSupplierCommand,
    ) -> Result<Supplier, SupplierDomainError> {
        let mut supplier = self
            .repository
            .find_by_id(command.supplier_id())
            .await?
            .ok_or(SupplierDomainError::SupplierNotFound)?;

        let nif = command.details().nif();
        if let Some(holder) = self.repository.find_by_nif(nif).await? {
            if holder.id() != supplier.id() {
                warn!(
                    supplier_id = %supplier.id(),
                    nif = nif.value(),
                    "supplier update rejected: nif already in use"
                );
                return Err(SupplierDomainError::DuplicateTaxIdentificationNumber);
            }
        }

        supplier.revise(command.details().clone(), Utc::now());
        if !self.repository.update(&supplier).await? {
            warn!(supplier_id = %supplier.id(), "supplier update skipped: deleted concurrently");
            return Err(SupplierDomainError::SupplierNotFound);
        }

        info!(supplier_id = %supplier.id(), "supplier updated");
        Ok(supplier)
    }

    async fn handle_delete(
        &self,
        command: DeleteSupplierCommand,
    ) -> Result<(), SupplierDomainError> {
        if !self.repository.delete(command.supplier_id()).await? {
            return Err(SupplierDomainError::SupplierNotFound);
        }

        info!(supplier_id = %command.supplier_id(), "supplier deleted");
        Ok(())
    }
}
