use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::suppliers::{
    application::{
        command_services::supplier_command_service_impl::SupplierCommandServiceImpl,
        query_services::supplier_query_service_impl::SupplierQueryServiceImpl,
    },
    infrastructure::persistence::repositories::postgres::sqlx_supplier_repository_impl::SqlxSupplierRepositoryImpl,
    interfaces::rest::controllers::supplier_rest_controller::{SupplierRestControllerState, router},
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_suppliers_router(pool: PgPool) -> Router {
    let repository = Arc::new(SqlxSupplierRepositoryImpl::new(pool));

    let command_service = Arc::new(SupplierCommandServiceImpl::new(repository.clone()));
    let query_service = Arc::new(SupplierQueryServiceImpl::new(repository));

    router(SupplierRestControllerState {
        command_service,
        query_service,
    })
}
