pub mod postgres;
pub mod tenancy_audit_event_repository;
