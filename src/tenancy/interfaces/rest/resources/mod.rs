pub mod tenancy_error_response_resource;
pub mod tenant_context_resource;
