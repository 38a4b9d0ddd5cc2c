use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::{
    condominiums::{
        domain::model::{
            entities::condominium::Condominium,
            enums::condominium_domain_error::CondominiumDomainError,
            queries::list_condominiums_query::ListCondominiumsQuery,
            value_objects::{
                condominium_details::{CondominiumDetails, CondominiumDetailsParts},
                condominium_id::CondominiumId,
            },
        },
        infrastructure::persistence::repositories::condominium_repository::CondominiumRepository,
    },
    fiscal_identity::domain::model::value_objects::tax_identification_number::TaxIdentificationNumber,
    shared::infrastructure::persistence::postgres::like_pattern::contains_pattern,
};

const CONDOMINIUM_COLUMNS: &str =
    "id, name, nif, address, postal_code, city, created_at, updated_at";

pub struct SqlxCondominiumRepositoryImpl {
    pool: PgPool,
}

impl SqlxCondominiumRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<Condominium, CondominiumDomainError> {
        let id: Uuid = row.try_get("id").map_err(map_infra_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_infra_error)?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(map_infra_error)?;

        let details = CondominiumDetails::new(CondominiumDetailsParts {
            name: row.try_get("name").map_err(map_infra_error)?,
            nif: row.try_get("nif").map_err(map_infra_error)?,
            address: row.try_get("address").map_err(map_infra_error)?,
            postal_code: row.try_get("postal_code").map_err(map_infra_error)?,
            city: row.try_get("city").map_err(map_infra_error)?,
        })?;

        Ok(Condominium::restore(
            CondominiumId::from_uuid(id),
            details,
            created_at,
            updated_at,
        ))
    }
}

#[async_trait]
impl CondominiumRepository for SqlxCondominiumRepositoryImpl {
    async fn insert(&self, condominium: &Condominium) -> Result<(), CondominiumDomainError> {
        let statement = r#"
            INSERT INTO condominiums (id, name, nif, address, postal_code, city, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#;

        let details = condominium.details();
        sqlx::query(statement)
            .bind(condominium.id().value())
            .bind(details.name().value())
            .bind(details.nif().value())
            .bind(details.address())
            .bind(details.postal_code().value())
            .bind(details.city())
            .bind(condominium.created_at())
            .bind(condominium.updated_at())
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(())
    }

    async fn update(&self, condominium: &Condominium) -> Result<bool, CondominiumDomainError> {
        let statement = r#"
            UPDATE condominiums
            SET name = $2,
                nif = $3,
                address = $4,
                postal_code = $5,
                city = $6,
                updated_at = $7
            WHERE id = $1
        "#;

        let details = condominium.details();
        let result = sqlx::query(statement)
            .bind(condominium.id().value())
            .bind(details.name().value())
            .bind(details.nif().value())
            .bind(details.address())
            .bind(details.postal_code().value())
            .bind(details.city())
            .bind(condominium.updated_at())
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(
        &self,
        condominium_id: &CondominiumId,
    ) -> Result<Option<Condominium>, CondominiumDomainError> {
        let statement = format!("SELECT {CONDOMINIUM_COLUMNS} FROM condominiums WHERE id = $1");

        let maybe_row = sqlx::query(&statement)
            .bind(condominium_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn find_by_nif(
        &self,
        nif: &TaxIdentificationNumber,
    ) -> Result<Option<Condominium>, CondominiumDomainError> {
        let statement = format!("SELECT {CONDOMINIUM_COLUMNS} FROM condominiums WHERE nif = $1");

        let maybe_row = sqlx::query(&statement)
            .bind(nif.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn delete(&self, condominium_id: &CondominiumId) -> Result<bool, CondominiumDomainError> {
        let result = sqlx::query("DELETE FROM condominiums WHERE id = $1")
            .bind(condominium_id.value())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(
        &self,
        query: &ListCondominiumsQuery,
    ) -> Result<Vec<Condominium>, CondominiumDomainError> {
        let statement = format!(
            r#"
            SELECT {CONDOMINIUM_COLUMNS}
            FROM condominiums
            WHERE $1::text IS NULL
               OR name ILIKE $1 ESCAPE '\'
               OR city ILIKE $1 ESCAPE '\'
               OR nif LIKE $1 ESCAPE '\'
            ORDER BY name ASC, id ASC
            LIMIT $2 OFFSET $3
            "#
        );

        let rows = sqlx::query(&statement)
            .bind(query.search().map(contains_pattern))
            .bind(query.page().limit())
            .bind(query.page().offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }
}

fn map_write_error(error: sqlx::Error) -> CondominiumDomainError {
    match &error {
        sqlx::Error::Database(database_error) if database_error.is_unique_violation() => {
            CondominiumDomainError::DuplicateTaxIdentificationNumber
        }
        _ => map_infra_error(error),
    }
}

fn map_infra_error(error: sqlx::Error) -> CondominiumDomainError {
    CondominiumDomainError::InfrastructureError(error.to_string())
}
