use async_trait::async_trait;
use sqlx::PgPool;

use crate::connection_router::domain::model::{
    entities::tenant_registration::TenantRegistration,
    enums::router_domain_error::RouterDomainError,
};

/// Opens the actual connection pool for a registered tenant. A separate seam
/// from the router so pool opening can be faked when exercising the registry
/// semantics.
#[async_trait]
pub trait TenantPoolOpenerRepository: Send + Sync {
    async fn open_pool(
        &self,
        registration: &TenantRegistration,
    ) -> Result<PgPool, RouterDomainError>;
}
