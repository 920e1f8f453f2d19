use async_trait::async_trait;

use crate::key_vault::domain::model::{
    enums::key_vault_domain_error::KeyVaultDomainError,
    value_objects::{derived_key::DerivedKey, secret_hash::SecretHash},
};

#[async_trait]
pub trait KeyManagementService: Send + Sync {
    /// Derives a key from a password. A missing salt means a fresh random
    /// 16-byte salt; missing iterations fall back to the configured count.
    /// Identical (password, salt, iterations) always yield identical bytes.
    async fn derive_key(
        &self,
        password: &str,
        salt: Option<&[u8]>,
        iterations: Option<u32>,
    ) -> Result<DerivedKey, KeyVaultDomainError>;

    /// Salted one-way digest for secret storage. A missing salt means a fresh
    /// random 32-byte salt, hex-encoded.
    async fn hash_secret(
        &self,
        secret: &str,
        salt_hex: Option<&str>,
    ) -> Result<SecretHash, KeyVaultDomainError>;

    /// Recomputes the digest from the candidate secret and stored salt and
    /// compares for exact equality.
    async fn verify_secret(
        &self,
        secret: &str,
        stored_hash_hex: &str,
        salt_hex: &str,
    ) -> Result<bool, KeyVaultDomainError>;

    /// Fresh cryptographically random 32-byte value, url-safe encoded, for
    /// use as an opaque bearer secret.
    async fn generate_secure_key(&self) -> String;

    /// Derives a brand-new key (fresh salt) from `new_password`. Existing
    /// ciphertext is the caller's to re-encrypt; rotation is audited with
    /// truncated fingerprints of both keys, never the material itself.
    async fn rotate_key(
        &self,
        old_key: &DerivedKey,
        new_password: &str,
    ) -> Result<DerivedKey, KeyVaultDomainError>;
}
