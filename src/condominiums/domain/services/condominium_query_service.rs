use async_trait::async_trait;

use crate::condominiums::domain::model::{
    entities::condominium::Condominium,
    enums::condominium_domain_error::CondominiumDomainError,
    queries::{
        get_condominium_by_id_query::GetCondominiumByIdQuery,
        list_condominiums_query::ListCondominiumsQuery,
    },
};

#[async_trait]
pub trait CondominiumQueryService: Send + Sync {
    async fn handle_get(
        &self,
        query: GetCondominiumByIdQuery,
    ) -> Result<Condominium, CondominiumDomainError>;

    async fn handle_list(
        &self,
        query: ListCondominiumsQuery,
    ) -> Result<Vec<Condominium>, CondominiumDomainError>;
}
