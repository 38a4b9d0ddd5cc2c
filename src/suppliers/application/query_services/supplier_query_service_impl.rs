use std::sync::Arc;

use async_trait::async_trait;

use crate::suppliers::{
    domain::{
        model::{
            entities::supplier::Supplier,
            enums::supplier_domain_error::SupplierDomainError,
            queries::{
                get_supplier_by_id_query::GetSupplierByIdQuery,
                list_suppliers_query::ListSuppliersQuery,
            },
        },
        services::supplier_query_service::SupplierQueryService,
    },
    infrastructure::persistence::repositories::supplier_repository::SupplierRepository,
};

pub struct SupplierQueryServiceImpl {
    repository: Arc<dyn SupplierRepository>,
}

impl SupplierQueryServiceImpl {
    pub fn new(repository: Arc<dyn SupplierRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SupplierQueryService for SupplierQueryServiceImpl {
    async fn handle_get(
        &self,
        query: GetSupplierByIdQuery,
    ) -> Result<Supplier, SupplierDomainError> {
        self.repository
            .find_by_id(query.supplier_id())
            .await?
            .ok_or(SupplierDomainError::SupplierNotFound)
    }

    async fn handle_list(
        &self,
        query: ListSuppliersQuery,
    ) -> Result<Vec<Supplier>, SupplierDomainError> {
        self.repository.list(&query).await
    }
}
