pub mod resolution_signals;
pub mod resolved_tenant;
pub mod tenant_context;
pub mod tenant_identifier;
