pub mod tenant_resolution_strategy;
pub mod tenant_resolver;
