pub mod sqlx_tenancy_audit_event_repository_impl;
