use async_trait::async_trait;
use sqlx::{PgConnection, Postgres, pool::PoolConnection};

use crate::{
    connection_router::domain::model::enums::router_domain_error::RouterDomainError,
    tenancy::domain::model::value_objects::{
        tenant_context::TenantContext, tenant_identifier::TenantIdentifier,
    },
};

/// A borrowed connection bound to one tenant's pool. The underlying
/// connection goes back to its pool when this handle drops, on every exit
/// path including cancellation.
pub struct ScopedTenantConnection {
    tenant_id: TenantIdentifier,
    connection: PoolConnection<Postgres>,
}

impl ScopedTenantConnection {
    pub fn new(tenant_id: TenantIdentifier, connection: PoolConnection<Postgres>) -> Self {
        Self {
            tenant_id,
            connection,
        }
    }

    pub fn tenant_id(&self) -> &TenantIdentifier {
        &self.tenant_id
    }

    pub fn connection(&mut self) -> &mut PgConnection {
        &mut self.connection
    }
}

#[async_trait]
pub trait TenantConnectionRouterRepository: Send + Sync {
    /// Borrows a connection from the tenant's pool, creating the pool on
    /// first use. Waits up to the configured acquire timeout on exhaustion.
    async fn get_session(
        &self,
        context: &TenantContext,
    ) -> Result<ScopedTenantConnection, RouterDomainError>;

    /// Closes the tenant's pool to new borrows, waits (bounded by the grace
    /// period) for outstanding connections to come back and releases the
    /// pool. A later `get_session` for the same tenant creates a fresh pool.
    async fn dispose(&self, tenant_id: &TenantIdentifier) -> Result<(), RouterDomainError>;

    /// Disposes every pool in the registry. Process shutdown only.
    async fn close_all(&self) -> Result<(), RouterDomainError>;
}
