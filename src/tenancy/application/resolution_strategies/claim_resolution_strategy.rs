use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use tracing::debug;

use crate::tenancy::domain::{
    model::{
        enums::resolution_source::ResolutionSource,
        value_objects::{
            resolution_signals::ResolutionSignals, tenant_identifier::TenantIdentifier,
        },
    },
    services::tenant_resolution_strategy::TenantResolutionStrategy,
};

/// Reads a custom claim from the bearer credential's payload. The payload is
/// decoded without cryptographic verification; signature checking belongs to
/// the authentication step downstream.
pub struct ClaimResolutionStrategy {
    claim_key: String,
}

impl ClaimResolutionStrategy {
    pub fn new(claim_key: impl Into<String>) -> Self {
        Self {
            claim_key: claim_key.into(),
        }
    }

    fn claim_from_bearer(&self, authorization: &str) -> Option<String> {
        let mut parts = authorization.split_whitespace();
        let scheme = parts.next()?;
        let token = parts.next()?;

        if !scheme.eq_ignore_ascii_case("bearer") || parts.next().is_some() {
            return None;
        }

        let mut segments = token.split('.');
        let _header = segments.next()?;
        let payload = segments.next()?;
        let _signature = segments.next()?;
        if segments.next().is_some() {
            return None;
        }

        let payload_bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
        let claims: serde_json::Value = serde_json::from_slice(&payload_bytes).ok()?;
        let candidate = claims.get(&self.claim_key)?.as_str()?;

        if candidate.is_empty() {
            return None;
        }

        Some(candidate.to_string())
    }
}

impl TenantResolutionStrategy for ClaimResolutionStrategy {
    fn source(&self) -> ResolutionSource {
        ResolutionSource::Claim
    }

    fn resolve(&self, signals: &ResolutionSignals) -> Option<TenantIdentifier> {
        let authorization = signals.header("authorization")?;

        let candidate = match self.claim_from_bearer(authorization) {
            Some(candidate) => candidate,
            None => {
                debug!(claim_key = %self.claim_key, "bearer credential absent or malformed");
                return None;
            }
        };

        match TenantIdentifier::new(candidate) {
            Ok(tenant_id) => Some(tenant_id),
            Err(_) => {
                debug!(claim_key = %self.claim_key, "claim value is not a valid tenant identifier");
                None
            }
        }
    }
}
