use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The plaintext key is returned exactly once at issuance; only the salted
/// hash is meant to be persisted.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct IssuedApiKeyResource {
    pub api_key: String,
    pub hash_hex: String,
    pub salt_hex: String,
}
