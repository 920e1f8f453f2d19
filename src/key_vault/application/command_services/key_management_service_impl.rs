use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use tracing::info;

use crate::key_vault::{
    domain::{
        model::{
            enums::key_vault_domain_error::KeyVaultDomainError,
            value_objects::{
                derived_key::{DERIVED_KEY_LENGTH, DerivedKey},
                secret_hash::SecretHash,
            },
        },
        services::key_management_service::KeyManagementService,
    },
    infrastructure::persistence::repositories::security_event_repository::{
        SecurityEventRecord, SecurityEventRepository,
    },
};

type HmacSha256 = Hmac<Sha256>;

const DEFAULT_SALT_LENGTH: usize = 16;
const SECRET_SALT_LENGTH: usize = 32;

pub struct KeyManagementServiceImpl {
    iterations: u32,
    security_event_repository: Arc<dyn SecurityEventRepository>,
}

impl KeyManagementServiceImpl {
    pub fn new(
        iterations: u32,
        security_event_repository: Arc<dyn SecurityEventRepository>,
    ) -> Self {
        Self {
            iterations,
            security_event_repository,
        }
    }

    fn salted_digest_hex(salt: &[u8], secret: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(secret.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[async_trait]
impl KeyManagementService for KeyManagementServiceImpl {
    async fn derive_key(
        &self,
        password: &str,
        salt: Option<&[u8]>,
        iterations: Option<u32>,
    ) -> Result<DerivedKey, KeyVaultDomainError> {
        if password.is_empty() {
            return Err(KeyVaultDomainError::InvalidKeyMaterial(
                "password must not be empty",
            ));
        }
        if let Some(supplied) = salt {
            if supplied.is_empty() {
                return Err(KeyVaultDomainError::InvalidKeyMaterial(
                    "salt must not be empty",
                ));
            }
        }

        let iterations = iterations.unwrap_or(self.iterations);
        if iterations == 0 {
            return Err(KeyVaultDomainError::InvalidKeyMaterial(
                "iteration count must be positive",
            ));
        }

        let salt = match salt {
            Some(supplied) => supplied.to_vec(),
            None => {
                let mut fresh = [0u8; DEFAULT_SALT_LENGTH];
                OsRng.fill_bytes(&mut fresh);
                fresh.to_vec()
            }
        };

        let key_bytes = pbkdf2_hmac_sha256(password.as_bytes(), &salt, iterations);

        DerivedKey::new(key_bytes.to_vec(), salt, iterations)
    }

    async fn hash_secret(
        &self,
        secret: &str,
        salt_hex: Option<&str>,
    ) -> Result<SecretHash, KeyVaultDomainError> {
        let salt = match salt_hex {
            Some(supplied) => hex::decode(supplied).map_err(|_| {
                KeyVaultDomainError::InvalidKeyMaterial("salt must be hex-encoded")
            })?,
            None => {
                let mut fresh = [0u8; SECRET_SALT_LENGTH];
                OsRng.fill_bytes(&mut fresh);
                fresh.to_vec()
            }
        };
        if salt.is_empty() {
            return Err(KeyVaultDomainError::InvalidKeyMaterial(
                "salt must not be empty",
            ));
        }

        let hash_hex = Self::salted_digest_hex(&salt, secret);

        Ok(SecretHash::new(hash_hex, hex::encode(salt)))
    }

    async fn verify_secret(
        &self,
        secret: &str,
        stored_hash_hex: &str,
        salt_hex: &str,
    ) -> Result<bool, KeyVaultDomainError> {
        let recomputed = self.hash_secret(secret, Some(salt_hex)).await?;

        Ok(recomputed.hash_hex() == stored_hash_hex)
    }

    async fn generate_secure_key(&self) -> String {
        let mut key = [0u8; DERIVED_KEY_LENGTH];
        OsRng.fill_bytes(&mut key);

        URL_SAFE_NO_PAD.encode(key)
    }

    async fn rotate_key(
        &self,
        old_key: &DerivedKey,
        new_password: &str,
    ) -> Result<DerivedKey, KeyVaultDomainError> {
        let new_key = self.derive_key(new_password, None, Some(old_key.iterations())).await?;

        let old_fingerprint = old_key.fingerprint();
        let new_fingerprint = new_key.fingerprint();
        info!(
            old_key = %old_fingerprint,
            new_key = %new_fingerprint,
            "key rotated"
        );
        let _ = self
            .security_event_repository
            .save_event(&SecurityEventRecord::new(
                "key_rotated",
                format!("old={old_fingerprint} new={new_fingerprint}"),
                Utc::now(),
            ))
            .await;

        Ok(new_key)
    }
}

/// PBKDF2 with HMAC-SHA256 at a fixed 32-byte output, so a single block
/// covers the whole key.
fn pbkdf2_hmac_sha256(password: &[u8], salt: &[u8], iterations: u32) -> [u8; DERIVED_KEY_LENGTH] {
    let prf = HmacSha256::new_from_slice(password).expect("hmac accepts keys of any length");

    let mut mac = prf.clone();
    mac.update(salt);
    mac.update(&1u32.to_be_bytes());
    let mut round = mac.finalize().into_bytes();

    let mut output = round;
    for _ in 1..iterations {
        let mut mac = prf.clone();
        mac.update(&round);
        round = mac.finalize().into_bytes();

        for (accumulated, fresh) in output.iter_mut().zip(round.iter()) {
            *accumulated ^= fresh;
        }
    }

    output.into()
}
