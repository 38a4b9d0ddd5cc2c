use async_trait::async_trait;

use crate::{
    condominiums::domain::model::{
        entities::condominium::Condominium,
        enums::condominium_domain_error::CondominiumDomainError,
        queries::list_condominiums_query::ListCondominiumsQuery,
        value_objects::condominium_id::CondominiumId,
    },
    fiscal_identity::domain::model::value_objects::tax_identification_number::TaxIdentificationNumber,
};

#[async_trait]
pub trait CondominiumRepository: Send + Sync {
    async fn insert(&self, condominium: &Condominium) -> Result<(), CondominiumDomainError>;

    /// Returns `false` when no row with this id exists any more.
    async fn update(&self, condominium: &Condominium) -> Result<bool, CondominiumDomainError>;

    async fn find_by_id(
        &self,
        condominium_id: &CondominiumId,
    ) -> Result<Option<Condominium>, CondominiumDomainError>;

    async fn find_by_nif(
        &self,
        nif: &TaxIdentificationNumber,
    ) -> Result<Option<Condominium>, CondominiumDomainError>;

    async fn delete(&self, condominium_id: &CondominiumId) -> Result<bool, CondominiumDomainError>;

    async fn list(
        &self,
        query: &ListCondominiumsQuery,
    ) -> Result<Vec<Condominium>, CondominiumDomainError>;
}
