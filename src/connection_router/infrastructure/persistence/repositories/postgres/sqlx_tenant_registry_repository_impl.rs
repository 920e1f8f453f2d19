use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::{
    connection_router::{
        domain::model::{
            entities::tenant_registration::TenantRegistration,
            enums::router_domain_error::RouterDomainError,
        },
        infrastructure::persistence::repositories::tenant_registry_repository::TenantRegistryRepository,
    },
    tenancy::domain::model::value_objects::tenant_identifier::TenantIdentifier,
};

pub struct SqlxTenantRegistryRepositoryImpl {
    admin_pool: PgPool,
}

impl SqlxTenantRegistryRepositoryImpl {
    pub fn new(admin_pool: PgPool) -> Self {
        Self { admin_pool }
    }
}

#[async_trait]
impl TenantRegistryRepository for SqlxTenantRegistryRepositoryImpl {
    async fn find_registration(
        &self,
        tenant_id: &TenantIdentifier,
    ) -> Result<Option<TenantRegistration>, RouterDomainError> {
        let statement = r#"
            SELECT tenant_id, is_active, database_name, plan_tier, feature_flags
            FROM tenants
            WHERE tenant_id = $1
        "#;

        let row = sqlx::query(statement)
            .bind(tenant_id.value())
            .fetch_optional(&self.admin_pool)
            .await
            .map_err(|e| RouterDomainError::InfrastructureError(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let is_active: bool = row
            .try_get("is_active")
            .map_err(|e| RouterDomainError::InfrastructureError(e.to_string()))?;
        let database_name: String = row
            .try_get("database_name")
            .map_err(|e| RouterDomainError::InfrastructureError(e.to_string()))?;
        let plan_tier: String = row
            .try_get("plan_tier")
            .map_err(|e| RouterDomainError::InfrastructureError(e.to_string()))?;
        let feature_flags: Vec<String> = row
            .try_get("feature_flags")
            .map_err(|e| RouterDomainError::InfrastructureError(e.to_string()))?;

        Ok(Some(TenantRegistration::new(
            tenant_id.clone(),
            is_active,
            database_name,
            plan_tier,
            feature_flags,
        )))
    }
}
