pub mod sqlx_router_audit_event_repository_impl;
pub mod sqlx_tenant_connection_router_repository_impl;
pub mod sqlx_tenant_pool_opener_repository_impl;
pub mod sqlx_tenant_registry_repository_impl;
