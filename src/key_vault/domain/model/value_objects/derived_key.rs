use sha2::{Digest, Sha256};

use crate::key_vault::domain::model::enums::key_vault_domain_error::KeyVaultDomainError;

pub const DERIVED_KEY_LENGTH: usize = 32;

/// Output of password-based key derivation. The salt always travels with the
/// key bytes so the derivation stays reproducible; a derived key is never
/// persisted separate from its salt.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DerivedKey {
    key_bytes: Vec<u8>,
    salt: Vec<u8>,
    iterations: u32,
}

impl DerivedKey {
    pub fn new(
        key_bytes: Vec<u8>,
        salt: Vec<u8>,
        iterations: u32,
    ) -> Result<Self, KeyVaultDomainError> {
        if key_bytes.len() != DERIVED_KEY_LENGTH {
            return Err(KeyVaultDomainError::InvalidKeyMaterial(
                "derived key must be 32 bytes",
            ));
        }
        if salt.is_empty() {
            return Err(KeyVaultDomainError::InvalidKeyMaterial(
                "salt must not be empty",
            ));
        }
        if iterations == 0 {
            return Err(KeyVaultDomainError::InvalidKeyMaterial(
                "iteration count must be positive",
            ));
        }

        Ok(Self {
            key_bytes,
            salt,
            iterations,
        })
    }

    pub fn key_bytes(&self) -> &[u8] {
        &self.key_bytes
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Truncated digest of the key bytes, safe for audit trails.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(&self.key_bytes);
        hex::encode(digest)[..8].to_string()
    }
}
