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

const RESERVED_SUBDOMAINS: [&str; 4] = ["www", "api", "staging", "dev"];

/// Takes the first host label as the tenant identifier. Hosts with fewer than
/// three labels have no subdomain, and reserved infrastructure labels never
/// name a tenant.
pub struct SubdomainResolutionStrategy;

impl TenantResolutionStrategy for SubdomainResolutionStrategy {
    fn source(&self) -> ResolutionSource {
        ResolutionSource::Subdomain
    }

    fn resolve(&self, signals: &ResolutionSignals) -> Option<TenantIdentifier> {
        let host = signals.host().split(':').next()?;
        let labels: Vec<&str> = host.split('.').collect();

        if labels.len() < 3 {
            return None;
        }

        let first = labels[0].to_lowercase();
        if first.is_empty() || RESERVED_SUBDOMAINS.contains(&first.as_str()) {
            debug!(host = %signals.host(), "host carries no tenant subdomain");
            return None;
        }

        TenantIdentifier::new(first).ok()
    }
}
