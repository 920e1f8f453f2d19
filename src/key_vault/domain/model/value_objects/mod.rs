pub mod derived_key;
pub mod secret_hash;
