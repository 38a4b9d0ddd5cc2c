use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use condoflow_api::{
    fiscal_identity::domain::model::value_objects::tax_identification_number::TaxIdentificationNumber,
    suppliers::{
        domain::model::{
            entities::supplier::Supplier, enums::supplier_domain_error::SupplierDomainError,
            queries::list_suppliers_query::ListSuppliersQuery,
            value_objects::supplier_id::SupplierId,
        },
        infrastructure::persistence::repositories::supplier_repository::SupplierRepository,
    },
};
use uuid::Uuid;

#[derive(Default)]
struct FakeSupplierRepositoryState {
    entries: HashMap<Uuid, Supplier>,
    saved_ids: Vec<Uuid>,
    deleted_ids: Vec<Uuid>,
    fail_writes: bool,
    vanish_before_update: bool,
}

pub struct FakeSupplierRepository {
    state: Mutex<FakeSupplierRepositoryState>,
}

impl FakeSupplierRepository {
    pub fn with_entries(entries: Vec<Supplier>) -> Self {
        let mut map = HashMap::new();
        for supplier in entries {
            map.insert(supplier.id().value(), supplier);
        }

        Self {
            state: Mutex::new(FakeSupplierRepositoryState {
                entries: map,
                ..FakeSupplierRepositoryState::default()
            }),
        }
    }

    pub fn fail_writes(&self) {
        self.state.lock().expect("mutex poisoned").fail_writes = true;
    }

    /// Drops the row right before the next update lands, like a delete
    /// racing between the service's read and its write.
    pub fn vanish_before_update(&self) {
        self.state.lock().expect("mutex poisoned").vanish_before_update = true;
    }

    pub fn saved_ids(&self) -> Vec<Uuid> {
        self.state.lock().expect("mutex poisoned").saved_ids.clone()
    }

    pub fn deleted_ids(&self) -> Vec<Uuid> {
        self.state.lock().expect("mutex poisoned").deleted_ids.clone()
    }

    pub fn stored(&self, supplier_id: Uuid) -> Option<Supplier> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .entries
            .get(&supplier_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().expect("mutex poisoned").entries.len()
    }
}

#[async_trait]
impl SupplierRepository for FakeSupplierRepository {
    async fn insert(&self, supplier: &Supplier) -> Result<(), SupplierDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        if state.fail_writes {
            return Err(SupplierDomainError::InfrastructureError(
                "write failed".to_string(),
            ));
        }

        state.saved_ids.push(supplier.id().value());
        state
            .entries
            .insert(supplier.id().value(), supplier.clone());
        Ok(())
    }

    async fn update(&self, supplier: &Supplier) -> Result<bool, SupplierDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        if state.fail_writes {
            return Err(SupplierDomainError::InfrastructureError(
                "write failed".to_string(),
            ));
        }
        if state.vanish_before_update {
            state.entries.remove(&supplier.id().value());
        }

        if !state.entries.contains_key(&supplier.id().value()) {
            return Ok(false);
        }

        state.saved_ids.push(supplier.id().value());
        state
            .entries
            .insert(supplier.id().value(), supplier.clone());
        Ok(true)
    }

    async fn find_by_id(
        &self,
        supplier_id: &SupplierId,
    ) -> Result<Option<Supplier>, SupplierDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state.entries.get(&supplier_id.value()).cloned())
    }

    async fn find_by_nif(
        &self,
        nif: &TaxIdentificationNumber,
    ) -> Result<Option<Supplier>, SupplierDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state
            .entries
            .values()
            .find(|supplier| supplier.details().nif() == nif)
            .cloned())
    }

    async fn delete(&self, supplier_id: &SupplierId) -> Result<bool, SupplierDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        let removed = state.entries.remove(&supplier_id.value()).is_some();
        if removed {
            state.deleted_ids.push(supplier_id.value());
        }
        Ok(removed)
    }

    async fn list(&self, query: &ListSuppliersQuery) -> Result<Vec<Supplier>, SupplierDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        let search = query.search().map(str::to_lowercase);

        let mut matching: Vec<Supplier> = state
            .entries
            .values()
            .filter(|supplier| {
                search.as_ref().is_none_or(|needle| {
                    supplier.details().name().value().to_lowercase().contains(needle)
                        || supplier.details().nif().value().contains(needle.as_str())
                })
            })
            .filter(|supplier| {
                query
                    .category()
                    .is_none_or(|category| supplier.details().category() == category)
            })
            .cloned()
            .collect();

        matching.sort_by(|left, right| {
            left.details()
                .name()
                .value()
                .cmp(right.details().name().value())
        });

        Ok(matching
            .into_iter()
            .skip(query.page().offset() as usize)
            .take(query.page().limit() as usize)
            .collect())
    }
}
