use async_trait::async_trait;

use crate::suppliers::domain::model::{
    entities::supplier::Supplier,
    enums::supplier_domain_error::SupplierDomainError,
    queries::{
        get_supplier_by_id_query::GetSupplierByIdQuery, list_suppliers_query::ListSuppliersQuery,
    },
};

#[async_trait]
pub trait SupplierQueryService: Send + Sync {
    async fn handle_get(&self, query: GetSupplierByIdQuery)
    -> Result<Supplier, SupplierDomainError>;

    async fn handle_list(
        &self,
        query: ListSuppliersQuery,
    ) -> Result<Vec<Supplier>, SupplierDomainError>;
}
