use chrono::{DateTime, Utc};

use crate::tenancy::domain::model::{
    enums::resolution_source::ResolutionSource, value_objects::tenant_identifier::TenantIdentifier,
};

/// Immutable, request-scoped tenant identity. Created once per request right
/// after resolution and discarded when the request completes; never cached and
/// never shared across requests. `source` is retained for diagnostics only.
#[derive(Clone, Debug)]
pub struct TenantContext {
    tenant_id: TenantIdentifier,
    source: ResolutionSource,
    resolved_at: DateTime<Utc>,
}

impl TenantContext {
    pub fn new(
        tenant_id: TenantIdentifier,
        source: ResolutionSource,
        resolved_at: DateTime<Utc>,
    ) -> Self {
        Self {
            tenant_id,
            source,
            resolved_at,
        }
    }

    pub fn tenant_id(&self) -> &TenantIdentifier {
        &self.tenant_id
    }

    pub fn source(&self) -> ResolutionSource {
        self.source
    }

    pub fn resolved_at(&self) -> DateTime<Utc> {
        self.resolved_at
    }
}
