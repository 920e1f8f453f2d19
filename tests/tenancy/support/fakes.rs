use std::sync::atomic::{AtomicUsize, Ordering};

use tenancy_axum_api::tenancy::domain::{
    model::{
        enums::resolution_source::ResolutionSource,
        value_objects::{
            resolution_signals::ResolutionSignals, tenant_identifier::TenantIdentifier,
        },
    },
    services::tenant_resolution_strategy::TenantResolutionStrategy,
};

/// Strategy that records how often it was consulted; used to verify the
/// composite resolver short-circuits.
pub struct CountingStrategy {
    source: ResolutionSource,
    answer: Option<&'static str>,
    calls: AtomicUsize,
}

impl CountingStrategy {
    pub fn new(source: ResolutionSource, answer: Option<&'static str>) -> Self {
        Self {
            source,
            answer,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TenantResolutionStrategy for CountingStrategy {
    fn source(&self) -> ResolutionSource {
        self.source
    }

    fn resolve(&self, _signals: &ResolutionSignals) -> Option<TenantIdentifier> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer
            .map(|value| TenantIdentifier::new(value.to_string()).expect("valid identifier"))
    }
}
