use crate::tenancy::domain::model::{
    enums::resolution_source::ResolutionSource, value_objects::tenant_identifier::TenantIdentifier,
};

/// Successful resolution outcome: the extracted identifier plus the strategy
/// that produced it.
#[derive(Clone, Debug)]
pub struct ResolvedTenant {
    tenant_id: TenantIdentifier,
    source: ResolutionSource,
}

impl ResolvedTenant {
    pub fn new(tenant_id: TenantIdentifier, source: ResolutionSource) -> Self {
        Self { tenant_id, source }
    }

    pub fn tenant_id(&self) -> &TenantIdentifier {
        &self.tenant_id
    }

    pub fn source(&self) -> ResolutionSource {
        self.source
    }
}
