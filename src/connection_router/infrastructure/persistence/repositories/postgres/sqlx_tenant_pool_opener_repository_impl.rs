use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{
    config::app_config::AppConfig,
    connection_router::{
        domain::model::{
            entities::tenant_registration::TenantRegistration,
            enums::router_domain_error::RouterDomainError,
        },
        infrastructure::persistence::repositories::tenant_pool_opener_repository::TenantPoolOpenerRepository,
    },
};

pub struct SqlxTenantPoolOpenerRepositoryImpl {
    config: AppConfig,
}

impl SqlxTenantPoolOpenerRepositoryImpl {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl TenantPoolOpenerRepository for SqlxTenantPoolOpenerRepositoryImpl {
    async fn open_pool(
        &self,
        registration: &TenantRegistration,
    ) -> Result<PgPool, RouterDomainError> {
        PgPoolOptions::new()
            .max_connections(self.config.tenant_pool_max_connections)
            .acquire_timeout(self.config.tenant_pool_acquire_timeout())
            .connect(&self.config.database_url_for(registration.database_name()))
            .await
            .map_err(|e| RouterDomainError::InfrastructureError(e.to_string()))
    }
}
