pub mod resolution_source;
pub mod tenancy_domain_error;
