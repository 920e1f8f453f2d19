use std::{collections::HashMap, sync::Arc, time::Duration};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tokio::sync::{OnceCell, RwLock};
use tracing::{info, warn};

use crate::{
    connection_router::infrastructure::persistence::repositories::{
        router_audit_event_repository::{RouterAuditEventRecord, RouterAuditEventRepository},
        tenant_connection_router_repository::{
            ScopedTenantConnection, TenantConnectionRouterRepository,
        },
        tenant_pool_opener_repository::TenantPoolOpenerRepository,
        tenant_registry_repository::TenantRegistryRepository,
    },
    connection_router::domain::model::enums::router_domain_error::RouterDomainError,
    tenancy::domain::model::value_objects::{
        tenant_context::TenantContext, tenant_identifier::TenantIdentifier,
    },
};

/// One slot per tenant. The `OnceCell` is the per-tenant creation critical
/// section: concurrent first requests for the same tenant run exactly one
/// creation, and creating tenant X's pool never blocks tenant Y's.
struct TenantPoolSlot {
    pool: OnceCell<PgPool>,
}

impl TenantPoolSlot {
    fn new() -> Self {
        Self {
            pool: OnceCell::new(),
        }
    }
}

pub struct SqlxTenantConnectionRouterRepositoryImpl {
    registry_repository: Arc<dyn TenantRegistryRepository>,
    pool_opener_repository: Arc<dyn TenantPoolOpenerRepository>,
    audit_event_repository: Arc<dyn RouterAuditEventRepository>,
    dispose_grace: Duration,
    pools: RwLock<HashMap<TenantIdentifier, Arc<TenantPoolSlot>>>,
}

impl SqlxTenantConnectionRouterRepositoryImpl {
    pub fn new(
        registry_repository: Arc<dyn TenantRegistryRepository>,
        pool_opener_repository: Arc<dyn TenantPoolOpenerRepository>,
        audit_event_repository: Arc<dyn RouterAuditEventRepository>,
        dispose_grace: Duration,
    ) -> Self {
        Self {
            registry_repository,
            pool_opener_repository,
            audit_event_repository,
            dispose_grace,
            pools: RwLock::new(HashMap::new()),
        }
    }

    async fn slot_for(&self, tenant_id: &TenantIdentifier) -> Arc<TenantPoolSlot> {
        {
            let read_guard = self.pools.read().await;
            if let Some(slot) = read_guard.get(tenant_id) {
                return slot.clone();
            }
        }

        let mut write_guard = self.pools.write().await;
        write_guard
            .entry(tenant_id.clone())
            .or_insert_with(|| Arc::new(TenantPoolSlot::new()))
            .clone()
    }

    async fn create_pool(&self, tenant_id: &TenantIdentifier) -> Result<PgPool, RouterDomainError> {
        let registration = self
            .registry_repository
            .find_registration(tenant_id)
            .await?
            .ok_or_else(|| RouterDomainError::TenantUnknown(tenant_id.to_string()))?;

        if !registration.is_active() {
            return Err(RouterDomainError::TenantInactive(tenant_id.to_string()));
        }

        let pool = self.pool_opener_repository.open_pool(&registration).await?;

        info!(tenant_id = %tenant_id, "tenant connection pool created");
        let _ = self
            .audit_event_repository
            .save_event(&RouterAuditEventRecord::new(
                "tenant_pool_created",
                tenant_id.value(),
                Some(format!("database={}", registration.database_name())),
                Utc::now(),
            ))
            .await;

        Ok(pool)
    }

    async fn close_pool(&self, tenant_id: &TenantIdentifier, pool: &PgPool) {
        if tokio::time::timeout(self.dispose_grace, pool.close())
            .await
            .is_err()
        {
            warn!(
                tenant_id = %tenant_id,
                "grace period elapsed before all borrowed connections were returned"
            );
        }

        info!(tenant_id = %tenant_id, "tenant connection pool disposed");
        let _ = self
            .audit_event_repository
            .save_event(&RouterAuditEventRecord::new(
                "tenant_pool_disposed",
                tenant_id.value(),
                None,
                Utc::now(),
            ))
            .await;
    }
}

#[async_trait]
impl TenantConnectionRouterRepository for SqlxTenantConnectionRouterRepositoryImpl {
    async fn get_session(
        &self,
        context: &TenantContext,
    ) -> Result<ScopedTenantConnection, RouterDomainError> {
        let tenant_id = context.tenant_id();
        let slot = self.slot_for(tenant_id).await;

        let pool = slot
            .pool
            .get_or_try_init(|| self.create_pool(tenant_id))
            .await?
            .clone();

        // If dispose raced with creation the slot is no longer registered;
        // never hand out a session from a half-closed pool.
        let still_registered = {
            let read_guard = self.pools.read().await;
            read_guard
                .get(tenant_id)
                .map(|current| Arc::ptr_eq(current, &slot))
                .unwrap_or(false)
        };
        if !still_registered {
            self.close_pool(tenant_id, &pool).await;
            return Err(RouterDomainError::PoolDisposing);
        }

        let connection = pool.acquire().await.map_err(map_acquire_error)?;

        Ok(ScopedTenantConnection::new(tenant_id.clone(), connection))
    }

    async fn dispose(&self, tenant_id: &TenantIdentifier) -> Result<(), RouterDomainError> {
        let slot = {
            let mut write_guard = self.pools.write().await;
            write_guard.remove(tenant_id)
        };

        let Some(slot) = slot else {
            return Ok(());
        };

        if let Some(pool) = slot.pool.get() {
            self.close_pool(tenant_id, pool).await;
        }

        Ok(())
    }

    async fn close_all(&self) -> Result<(), RouterDomainError> {
        let drained: Vec<(TenantIdentifier, Arc<TenantPoolSlot>)> = {
            let mut write_guard = self.pools.write().await;
            write_guard.drain().collect()
        };

        for (tenant_id, slot) in drained {
            if let Some(pool) = slot.pool.get() {
                self.close_pool(&tenant_id, pool).await;
            }
        }

        Ok(())
    }
}

fn map_acquire_error(error: sqlx::Error) -> RouterDomainError {
    match error {
        sqlx::Error::PoolTimedOut => RouterDomainError::PoolExhausted,
        sqlx::Error::PoolClosed => RouterDomainError::PoolDisposing,
        other => RouterDomainError::InfrastructureError(other.to_string()),
    }
}
