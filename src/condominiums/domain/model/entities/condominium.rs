use chrono::{DateTime, Utc};

use crate::condominiums::domain::model::value_objects::{
    condominium_details::CondominiumDetails, condominium_id::CondominiumId,
};

#[derive(Clone, Debug)]
pub struct Condominium {
    id: CondominiumId,
    details: CondominiumDetails,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Condominium {
    pub fn register(details: CondominiumDetails, now: DateTime<Utc>) -> Self {
        Self {
            id: CondominiumId::new_random(),
            details,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn restore(
        id: CondominiumId,
        details: CondominiumDetails,
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

    pub fn revise(&mut self, details: CondominiumDetails, now: DateTime<Utc>) {
        self.details = details;
        self.updated_at = now;
    }

    pub fn id(&self) -> &CondominiumId {
        &self.id
    }

    pub fn details(&self) -> &CondominiumDetails {
        &self.details
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
