use std::future::Future;

use crate::tenancy::domain::model::{
    enums::tenancy_domain_error::TenancyDomainError, value_objects::tenant_context::TenantContext,
};

tokio::task_local! {
    static CURRENT_TENANT_CONTEXT: TenantContext;
}

/// Ambient per-request propagation of the resolved tenant. The context lives
/// in a task-local scoped to one request's future, so concurrent requests can
/// never observe each other's tenant; there is no process-wide current tenant.
pub struct TenantContextScope;

impl TenantContextScope {
    /// Runs `operation` with `context` established for every call reached
    /// from it, without explicit parameter threading.
    pub async fn establish<F>(context: TenantContext, operation: F) -> F::Output
    where
        F: Future,
    {
        CURRENT_TENANT_CONTEXT.scope(context, operation).await
    }

    pub fn current() -> Option<TenantContext> {
        CURRENT_TENANT_CONTEXT
            .try_with(|context| context.clone())
            .ok()
    }

    /// Tenant-scoped operations must use this variant: absence of a tenant
    /// context is always an error, never a default tenant.
    pub fn require() -> Result<TenantContext, TenancyDomainError> {
        Self::current().ok_or(TenancyDomainError::MissingContext)
    }
}
