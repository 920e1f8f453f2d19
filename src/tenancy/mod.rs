use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tracing::warn;

use crate::{
    config::app_config::AppConfig,
    tenancy::{
        application::{
            resolution_strategies::{
                claim_resolution_strategy::ClaimResolutionStrategy,
                header_resolution_strategy::HeaderResolutionStrategy,
                path_resolution_strategy::PathResolutionStrategy,
                subdomain_resolution_strategy::SubdomainResolutionStrategy,
            },
            resolver_services::composite_tenant_resolver_impl::CompositeTenantResolverImpl,
        },
        domain::services::tenant_resolution_strategy::TenantResolutionStrategy,
        infrastructure::persistence::repositories::postgres::sqlx_tenancy_audit_event_repository_impl::SqlxTenancyAuditEventRepositoryImpl,
        interfaces::rest::{
            controllers::tenant_context_rest_controller,
            middleware::tenant_resolution_layer::TenantResolutionLayerState,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_tenant_resolution_state(
    config: &AppConfig,
    admin_pool: PgPool,
) -> TenantResolutionLayerState {
    let resolver = Arc::new(CompositeTenantResolverImpl::new(build_strategy_chain(
        config,
    )));
    let audit_event_repository = Arc::new(SqlxTenancyAuditEventRepositoryImpl::new(admin_pool));

    TenantResolutionLayerState {
        resolver,
        audit_event_repository,
    }
}

pub fn build_tenancy_router() -> Router {
    tenant_context_rest_controller::router()
}

fn build_strategy_chain(config: &AppConfig) -> Vec<Arc<dyn TenantResolutionStrategy>> {
    config
        .tenant_resolver_chain
        .iter()
        .filter_map(|name| -> Option<Arc<dyn TenantResolutionStrategy>> {
            match name.as_str() {
                "claim" => Some(Arc::new(ClaimResolutionStrategy::new(
                    config.tenant_claim_key.clone(),
                ))),
                "subdomain" => Some(Arc::new(SubdomainResolutionStrategy)),
                "header" => Some(Arc::new(HeaderResolutionStrategy::new(
                    config.tenant_header_name.clone(),
                ))),
                "path" => Some(Arc::new(PathResolutionStrategy)),
                unknown => {
                    warn!(strategy = %unknown, "unknown resolver strategy in chain, skipping");
                    None
                }
            }
        })
        .collect()
}
