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

/// Returns the value of the configured tenant header verbatim. The header
/// name is deployment configuration, not a hardcoded constant.
pub struct HeaderResolutionStrategy {
    header_name: String,
}

impl HeaderResolutionStrategy {
    pub fn new(header_name: impl Into<String>) -> Self {
        Self {
            header_name: header_name.into(),
        }
    }
}

impl TenantResolutionStrategy for HeaderResolutionStrategy {
    fn source(&self) -> ResolutionSource {
        ResolutionSource::Header
    }

    fn resolve(&self, signals: &ResolutionSignals) -> Option<TenantIdentifier> {
        let value = signals.header(&self.header_name)?.trim();

        if value.is_empty() {
            return None;
        }

        match TenantIdentifier::new(value.to_string()) {
            Ok(tenant_id) => Some(tenant_id),
            Err(_) => {
                debug!(header = %self.header_name, "header value is not a valid tenant identifier");
                None
            }
        }
    }
}
