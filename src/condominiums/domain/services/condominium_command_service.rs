use async_trait::async_trait;

use crate::condominiums::domain::model::{
    commands::{
        create_condominium_command::CreateCondominiumCommand,
        delete_condominium_command::DeleteCondominiumCommand,
        update_condominium_command::UpdateCondominiumCommand,
    },
    entities::condominium::Condominium,
    enums::condominium_domain_error::CondominiumDomainError,
};

#[async_trait]
pub trait CondominiumCommandService: Send + Sync {
    async fn handle_create(
        &self,
        command: CreateCondominiumCommand,
    ) -> Result<Condominium, CondominiumDomainError>;

    async fn handle_update(
        &self,
        command: UpdateCondominiumCommand,
    ) -> Result<Condominium, CondominiumDomainError>;

    async fn handle_delete(
        &self,
        command: DeleteCondominiumCommand,
    ) -> Result<(), CondominiumDomainError>;
}
