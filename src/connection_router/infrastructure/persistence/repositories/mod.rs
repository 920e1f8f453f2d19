pub mod postgres;
pub mod router_audit_event_repository;
pub mod tenant_connection_router_repository;
pub mod tenant_pool_opener_repository;
pub mod tenant_registry_repository;
