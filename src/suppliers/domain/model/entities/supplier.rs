use chrono::{DateTime, Utc};

use crate::suppliers::domain::model::value_objects::{
    supplier_details::SupplierDetails, supplier_id::SupplierId,
};

#[derive(Clone, Debug)]
pub struct Supplier {
    id: SupplierId,
    details: SupplierDetails,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Supplier {
    pub fn register(details: SupplierDetails, now: DateTime<Utc>) -> Self {
        Self {
            id: SupplierId::new_random(),
            details,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn restore(
        id: SupplierId,
        details: SupplierDetails,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            details,
            created_at,
            updated_at,
        }
    }

    pub fn revise(&mut self, details: SupplierDetails, now: DateTime<Utc>) {
        self.details = details;
        self.updated_at = now;
    }

    pub fn id(&self) -> &SupplierId {
        &self.id
    }

    pub fn details(&self) -> &SupplierDetails {
        &self.details
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
