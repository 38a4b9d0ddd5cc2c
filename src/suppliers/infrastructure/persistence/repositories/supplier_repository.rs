use async_trait::async_trait;

use crate::{
    fiscal_identity::domain::model::value_objects::tax_identification_number::TaxIdentificationNumber,
    suppliers::domain::model::{
        entities::supplier::Supplier, enums::supplier_domain_error::SupplierDomainError,
        queries::list_suppliers_query::ListSuppliersQuery, value_objects::supplier_id::SupplierId,
    },
};

#[async_trait]
pub trait SupplierRepository: Send + Sync {
    async fn insert(&self, supplier: &Supplier) -> Result<(), SupplierDomainError>;

    /// Returns `false` when no row with this id exists any more.
    async fn update(&self, supplier: &Supplier) -> Result<bool, SupplierDomainError>;

    async fn find_by_id(
        &self,
        supplier_id: &SupplierId,
    ) -> Result<Option<Supplier>, SupplierDomainError>;

    async fn find_by_nif(
        &self,
        nif: &TaxIdentificationNumber,
    ) -> Result<Option<Supplier>, SupplierDomainError>;

    /// Returns `false` when nothing was deleted.
    async fn delete(&self, supplier_id: &SupplierId) -> Result<bool, SupplierDomainError>;

    async fn list(&self, query: &ListSuppliersQuery) -> Result<Vec<Supplier>, SupplierDomainError>;
}
