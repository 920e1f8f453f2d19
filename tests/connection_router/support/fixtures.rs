use chrono::Utc;
use tenancy_axum_api::{
    connection_router::domain::model::entities::tenant_registration::TenantRegistration,
    tenancy::domain::model::{
        enums::resolution_source::ResolutionSource,
        value_objects::{tenant_context::TenantContext, tenant_identifier::TenantIdentifier},
    },
};

pub fn tenant_id(value: &str) -> TenantIdentifier {
    TenantIdentifier::new(value.to_string()).expect("valid identifier")
}

pub fn context_for(tenant: &str) -> TenantContext {
    TenantContext::new(tenant_id(tenant), ResolutionSource::Header, Utc::now())
}

pub fn active_registration(tenant: &str) -> TenantRegistration {
    TenantRegistration::new(
        tenant_id(tenant),
        true,
        format!("tenant_{tenant}"),
        "standard",
        vec!["budgets".to_string()],
    )
}

pub fn inactive_registration(tenant: &str) -> TenantRegistration {
    TenantRegistration::new(
        tenant_id(tenant),
        false,
        format!("tenant_{tenant}"),
        "standard",
        Vec::new(),
    )
}
