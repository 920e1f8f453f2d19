pub mod key_vault_domain_error;
