pub mod composite_tenant_resolver_impl;
