use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SupplierResource {
    pub id: String,
    pub name: String,
    pub nif: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub category: String,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
