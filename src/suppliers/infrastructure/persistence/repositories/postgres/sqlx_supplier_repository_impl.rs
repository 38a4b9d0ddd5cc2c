use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::{
    fiscal_identity::domain::model::value_objects::tax_identification_number::TaxIdentificationNumber,
    shared::infrastructure::persistence::postgres::like_pattern::contains_pattern,
    suppliers::{
        domain::model::{
            entities::supplier::Supplier,
            enums::supplier_domain_error::SupplierDomainError,
            queries::list_suppliers_query::ListSuppliersQuery,
            value_objects::{
                supplier_details::{SupplierDetails, SupplierDetailsParts},
                supplier_id::SupplierId,
            },
        },
        infrastructure::persistence::repositories::supplier_repository::SupplierRepository,
    },
};

const SUPPLIER_COLUMNS: &str =
    "id, name, nif, email, phone, category, address, notes, created_at, updated_at";

pub struct SqlxSupplierRepositoryImpl {
    pool: PgPool,
}

impl SqlxSupplierRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<Supplier, SupplierDomainError> {
        let id: Uuid = row.try_get("id").map_err(map_infra_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_infra_error)?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(map_infra_error)?;

        let details = SupplierDetails::new(SupplierDetailsParts {
            name: row.try_get("name").map_err(map_infra_error)?,
            nif: row.try_get("nif").map_err(map_infra_error)?,
            email: row.try_get("email").map_err(map_infra_error)?,
            phone: row.try_get("phone").map_err(map_infra_error)?,
            category: row.try_get("category").map_err(map_infra_error)?,
            address: row.try_get("address").map_err(map_infra_error)?,
            notes: row.try_get("notes").map_err(map_infra_error)?,
        })?;

        Ok(Supplier::restore(
            SupplierId::from_uuid(id),
            details,
            created_at,
            updated_at,
        ))
    }
}

#[async_trait]
impl SupplierRepository for SqlxSupplierRepositoryImpl {
    async fn insert(&self, supplier: &Supplier) -> Result<(), SupplierDomainError> {
        let statement = r#"
            INSERT INTO suppliers (id, name, nif, email, phone, category, address, notes, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        "#;

        let details = supplier.details();
        sqlx::query(statement)
            .bind(supplier.id().value())
            .bind(details.name().value())
            .bind(details.nif().value())
            .bind(details.email().map(|email| email.value()))
            .bind(details.phone().map(|phone| phone.value()))
            .bind(details.category().as_str())
            .bind(details.address())
            .bind(details.notes())
            .bind(supplier.created_at())
            .bind(supplier.updated_at())
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(())
    }

    async fn update(&self, supplier: &Supplier) -> Result<bool, SupplierDomainError> {
        let statement = r#"
            UPDATE suppliers
            SET name = $2,
                nif = $3,
                email = $4,
                phone = $5,
                category = $6,
                address = $7,
                notes = $8,
                updated_at = $9
            WHERE id = $1
        "#;

        let details = supplier.details();
        let result = sqlx::query(statement)
            .bind(supplier.id().value())
            .bind(details.name().value())
            .bind(details.nif().value())
            .bind(details.email().map(|email| email.value()))
            .bind(details.phone().map(|phone| phone.value()))
            .bind(details.category().as_str())
            .bind(details.address())
            .bind(details.notes())
            .bind(supplier.updated_at())
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(
        &self,
        supplier_id: &SupplierId,
    ) -> Result<Option<Supplier>, SupplierDomainError> {
        let statement = format!("SELECT {SUPPLIER_COLUMNS} FROM suppliers WHERE id = $1");

        let maybe_row = sqlx::query(&statement)
            .bind(supplier_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn find_by_nif(
        &self,
        nif: &TaxIdentificationNumber,
    ) -> Result<Option<Supplier>, SupplierDomainError> {
        let statement = format!("SELECT {SUPPLIER_COLUMNS} FROM suppliers WHERE nif = $1");

        let maybe_row = sqlx::query(&statement)
            .bind(nif.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn delete(&self, supplier_id: &SupplierId) -> Result<bool, SupplierDomainError> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(supplier_id.value())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, query: &ListSuppliersQuery) -> Result<Vec<Supplier>, SupplierDomainError> {
        let statement = format!(
            r#"
            SELECT {SUPPLIER_COLUMNS}
            FROM suppliers
            WHERE ($1::text IS NULL OR name ILIKE $1 ESCAPE '\' OR nif LIKE $1 ESCAPE '\')
              AND ($2::text IS NULL OR category = $2)
            ORDER BY name ASC, id ASC
            LIMIT $3 OFFSET $4
            "#
        );

        let rows = sqlx::query(&statement)
            .bind(query.search().map(contains_pattern))
            .bind(query.category().map(|category| category.as_str()))
            .bind(query.page().limit())
            .bind(query.page().offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }
}

fn map_write_error(error: sqlx::Error) -> SupplierDomainError {
    match &error {
        sqlx::Error::Database(database_error) if database_error.is_unique_violation() => {
            SupplierDomainError::DuplicateTaxIdentificationNumber
        }
        _ => map_infra_error(error),
    }
}

fn map_infra_error(error: sqlx::Error) -> SupplierDomainError {
    SupplierDomainError::InfrastructureError(error.to_string())
}
