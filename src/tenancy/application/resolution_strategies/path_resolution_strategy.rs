use crate::tenancy::domain::{
    model::{
        enums::resolution_source::ResolutionSource,
        value_objects::{
            resolution_signals::ResolutionSignals, tenant_identifier::TenantIdentifier,
        },
    },
    services::tenant_resolution_strategy::TenantResolutionStrategy,
};

/// Matches the fixed `/v1/tenants/{id}/...` path prefix.
pub struct PathResolutionStrategy;

impl TenantResolutionStrategy for PathResolutionStrategy {
    fn source(&self) -> ResolutionSource {
        ResolutionSource::Path
    }

    fn resolve(&self, signals: &ResolutionSignals) -> Option<TenantIdentifier> {
        // Only the leading slash is dropped; a path like `//v1/tenants/x` or
        // an empty identifier segment is malformed and must not match.
        let path = signals.path().strip_prefix('/').unwrap_or(signals.path());
        let mut segments = path.split('/');

        if segments.next() != Some("v1") || segments.next() != Some("tenants") {
            return None;
        }

        let candidate = segments.next()?;
        if candidate.is_empty() {
            return None;
        }

        TenantIdentifier::new(candidate.to_string()).ok()
    }
}
