use std::sync::Arc;

use tracing::{debug, warn};

use crate::tenancy::domain::{
    model::value_objects::{
        resolution_signals::ResolutionSignals, resolved_tenant::ResolvedTenant,
    },
    services::{
        tenant_resolution_strategy::TenantResolutionStrategy, tenant_resolver::TenantResolver,
    },
};

/// Iterates the configured chain in fixed order and stops at the first hit.
/// Strategies that disagree are never cross-checked; precedence is the whole
/// policy.
pub struct CompositeTenantResolverImpl {
    strategies: Vec<Arc<dyn TenantResolutionStrategy>>,
}

impl CompositeTenantResolverImpl {
    pub fn new(strategies: Vec<Arc<dyn TenantResolutionStrategy>>) -> Self {
        Self { strategies }
    }
}

impl TenantResolver for CompositeTenantResolverImpl {
    fn resolve(&self, signals: &ResolutionSignals) -> Option<ResolvedTenant> {
        for strategy in &self.strategies {
            if let Some(tenant_id) = strategy.resolve(signals) {
                debug!(
                    tenant_id = %tenant_id,
                    source = %strategy.source(),
                    "tenant resolved"
                );
                return Some(ResolvedTenant::new(tenant_id, strategy.source()));
            }
        }

        warn!(path = %signals.path(), "no resolution strategy matched the request");
        None
    }
}
