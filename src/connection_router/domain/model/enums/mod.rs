pub mod router_domain_error;
