use crate::tenancy::domain::model::value_objects::tenant_identifier::TenantIdentifier;

/// Tenant metadata as reported by the global tenant registry: activation
/// state, the database the tenant's data lives in, and plan information. Read
/// exactly once per pool creation.
#[derive(Clone, Debug)]
pub struct TenantRegistration {
    tenant_id: TenantIdentifier,
    is_active: bool,
    database_name: String,
    plan_tier: String,
    feature_flags: Vec<String>,
}

impl TenantRegistration {
    pub fn new(
        tenant_id: TenantIdentifier,
        is_active: bool,
        database_name: impl Into<String>,
        plan_tier: impl Into<String>,
        feature_flags: Vec<String>,
    ) -> Self {
        Self {
            tenant_id,
            is_active,
            database_name: database_name.into(),
            plan_tier: plan_tier.into(),
            feature_flags,
        }
    }

    pub fn tenant_id(&self) -> &TenantIdentifier {
        &self.tenant_id
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn plan_tier(&self) -> &str {
        &self.plan_tier
    }

    pub fn feature_flags(&self) -> &[String] {
        &self.feature_flags
    }
}
