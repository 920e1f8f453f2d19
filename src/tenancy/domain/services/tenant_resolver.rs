use crate::tenancy::domain::model::value_objects::{
    resolution_signals::ResolutionSignals, resolved_tenant::ResolvedTenant,
};

/// Canonical resolution policy over an ordered strategy chain. First match
/// wins and short-circuits; `None` means every strategy missed. The resolver
/// only extracts an identifier, it never validates tenant existence.
pub trait TenantResolver: Send + Sync {
    fn resolve(&self, signals: &ResolutionSignals) -> Option<ResolvedTenant>;
}
