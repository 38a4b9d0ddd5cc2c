use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::condominiums::{
    application::{
        command_services::condominium_command_service_impl::CondominiumCommandServiceImpl,
        query_services::condominium_query_service_impl::CondominiumQueryServiceImpl,
    },
    infrastructure::persistence::repositories::postgres::sqlx_condominium_repository_impl::SqlxCondominiumRepositoryImpl,
    interfaces::rest::controllers::condominium_rest_controller::{
        CondominiumRestControllerState, router,
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_condominiums_router(pool: PgPool) -> Router {
    let repository = Arc::new(SqlxCondominiumRepositoryImpl::new(pool));

    let command_service = Arc::new(CondominiumCommandServiceImpl::new(repository.clone()));
    let query_service = Arc::new(CondominiumQueryServiceImpl::new(repository));

    router(CondominiumRestControllerState {
        command_service,
        query_service,
    })
}
