use std::sync::Arc;

use async_trait::async_trait;

use crate::condominiums::{
    domain::{
        model::{
            entities::condominium::Condominium,
            enums::condominium_domain_error::CondominiumDomainError,
            queries::{
                get_condominium_by_id_query::GetCondominiumByIdQuery,
                list_condominiums_query::ListCondominiumsQuery,
            },
        },
        services::condominium_query_service::CondominiumQueryService,
    },
    infrastructure::persistence::repositories::condominium_repository::CondominiumRepository,
};

pub struct CondominiumQueryServiceImpl {
    repository: Arc<dyn CondominiumRepository>,
}

impl CondominiumQueryServiceImpl {
    pub fn new(repository: Arc<dyn CondominiumRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CondominiumQueryService for CondominiumQueryServiceImpl {
    async fn handle_get(
        &self,
        query: GetCondominiumByIdQuery,
    ) -> Result<Condominium, CondominiumDomainError> {
        self.repository
            .find_by_id(query.condominium_id())
            .await?
            .ok_or(CondominiumDomainError::CondominiumNotFound)
    }

    async fn handle_list(
        &self,
        query: ListCondominiumsQuery,
    ) -> Result<Vec<Condominium>, CondominiumDomainError> {
        self.repository.list(&query).await
    }
}
