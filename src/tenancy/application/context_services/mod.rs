pub mod tenant_context_scope;
