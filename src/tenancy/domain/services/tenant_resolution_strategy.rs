use crate::tenancy::domain::model::{
    enums::resolution_source::ResolutionSource,
    value_objects::{resolution_signals::ResolutionSignals, tenant_identifier::TenantIdentifier},
};

/// One signal, one extraction attempt. Strategies are stateless, never error
/// and have no side effects beyond diagnostic logging; malformed or missing
/// input is simply a miss.
pub trait TenantResolutionStrategy: Send + Sync {
    fn source(&self) -> ResolutionSource;

    fn resolve(&self, signals: &ResolutionSignals) -> Option<TenantIdentifier>;
}
