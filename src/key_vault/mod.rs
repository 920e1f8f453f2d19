use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    config::app_config::AppConfig,
    key_vault::{
        application::command_services::key_management_service_impl::KeyManagementServiceImpl,
        infrastructure::persistence::repositories::postgres::sqlx_security_event_repository_impl::SqlxSecurityEventRepositoryImpl,
        interfaces::rest::controllers::api_key_rest_controller::{
            ApiKeyRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_key_vault_router(config: &AppConfig, admin_pool: PgPool) -> Router {
    let security_event_repository = Arc::new(SqlxSecurityEventRepositoryImpl::new(admin_pool));
    let key_management_service = Arc::new(KeyManagementServiceImpl::new(
        config.key_derivation_iterations,
        security_event_repository,
    ));

    router(ApiKeyRestControllerState {
        key_management_service,
    })
}
