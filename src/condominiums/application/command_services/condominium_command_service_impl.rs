use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::condominiums::{
    domain::{
        model::{
            commands::{
                create_condominium_command::CreateCondominiumCommand,
                delete_condominium_command::DeleteCondominiumCommand,
                update_condominium_command::UpdateCondominiumCommand,
            },
            entities::condominium::Condominium,
            enums::condominium_domain_error::CondominiumDomainError,
        },
        services::condominium_command_service::CondominiumCommandService,
    },
    infrastructure::persistence::repositories::condominium_repository::CondominiumRepository,
};

pub struct CondominiumCommandServiceImpl {
    repository: Arc<dyn CondominiumRepository>,
}

impl CondominiumCommandServiceImpl {
    pub fn new(repository: Arc<dyn CondominiumRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CondominiumCommandService for CondominiumCommandServiceImpl {
    async fn handle_create(
        &self,
        command: CreateCondominiumCommand,
    ) -> Result<Condominium, CondominiumDomainError> {
        let nif = command.details().nif();
        if self.repository.find_by_nif(nif).await?.is_some() {
            warn!(nif = nif.value(), "condominium registration rejected: nif already in use");
            return Err(CondominiumDomainError::DuplicateTaxIdentificationNumber);
        }

        let condominium = Condominium::register(command.details().clone(), Utc::now());
        self.repository.insert(&condominium).await?;

        info!(condominium_id = %condominium.id(), "condominium registered");
        Ok(condominium)
    }

    async fn handle_update(
        &self,
        command: UpdateCondominiumCommand,
    ) -> Result<Condominium, CondominiumDomainError> {
        let mut condominium = self
            .repository
            .find_by_id(command.condominium_id())
            .await?
            .ok_or(CondominiumDomainError::CondominiumNotFound)?;

        let nif = command.details().nif();
        if let Some(holder) = self.repository.find_by_nif(nif).await? {
            if holder.id() != condominium.id() {
                warn!(
                    condominium_id = %condominium.id(),
                    nif = nif.value(),
                    "condominium update rejected: nif already in use"
                );
                return Err(CondominiumDomainError::DuplicateTaxIdentificationNumber);
            }
        }

        condominium.revise(command.details().clone(), Utc::now());
        if !self.repository.update(&condominium).await? {
            warn!(condominium_id = %condominium.id(), "condominium update skipped: deleted concurrently");
            return Err(CondominiumDomainError::CondominiumNotFound);
        }

        info!(condominium_id = %condominium.id(), "condominium updated");
        Ok(condominium)
    }

    async fn handle_delete(
        &self,
        command: DeleteCondominiumCommand,
    ) -> Result<(), CondominiumDomainError> {
        if !self.repository.delete(command.condominium_id()).await? {
            return Err(CondominiumDomainError::CondominiumNotFound);
        }

        info!(condominium_id = %command.condominium_id(), "condominium deleted");
        Ok(())
    }
}
