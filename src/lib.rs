pub mod config;
pub mod connection_router;
pub mod key_vault;
pub mod tenancy;
