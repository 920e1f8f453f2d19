pub mod postgres;
pub mod security_event_repository;
