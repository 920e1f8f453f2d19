use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    config::app_config::AppConfig,
    connection_router::{
        infrastructure::persistence::repositories::{
            postgres::{
                sqlx_router_audit_event_repository_impl::SqlxRouterAuditEventRepositoryImpl,
                sqlx_tenant_connection_router_repository_impl::SqlxTenantConnectionRouterRepositoryImpl,
                sqlx_tenant_pool_opener_repository_impl::SqlxTenantPoolOpenerRepositoryImpl,
                sqlx_tenant_registry_repository_impl::SqlxTenantRegistryRepositoryImpl,
            },
            tenant_connection_router_repository::TenantConnectionRouterRepository,
        },
        interfaces::rest::controllers::session_rest_controller::{
            SessionRestControllerState, router,
        },
    },
};

pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_connection_router(
    config: &AppConfig,
    admin_pool: PgPool,
) -> (Router, Arc<dyn TenantConnectionRouterRepository>) {
    let registry_repository = Arc::new(SqlxTenantRegistryRepositoryImpl::new(admin_pool.clone()));
    let pool_opener_repository = Arc::new(SqlxTenantPoolOpenerRepositoryImpl::new(config.clone()));
    let audit_event_repository = Arc::new(SqlxRouterAuditEventRepositoryImpl::new(admin_pool));

    let connection_router: Arc<dyn TenantConnectionRouterRepository> =
        Arc::new(SqlxTenantConnectionRouterRepositoryImpl::new(
            registry_repository,
            pool_opener_repository,
            audit_event_repository,
            config.tenant_pool_dispose_grace(),
        ));

    let router = router(SessionRestControllerState {
        connection_router: connection_router.clone(),
    });

    (router, connection_router)
}
