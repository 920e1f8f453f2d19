pub mod issued_api_key_resource;
pub mod key_vault_error_response_resource;
