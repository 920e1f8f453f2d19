use thiserror::Error;

/// Errors carry the reason, never key material; audit and log output only
/// ever see truncated fingerprints.
#[derive(Debug, Error)]
pub enum KeyVaultDomainError {
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(&'static str),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
