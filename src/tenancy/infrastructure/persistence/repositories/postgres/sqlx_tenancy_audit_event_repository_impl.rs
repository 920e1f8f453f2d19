use async_trait::async_trait;
use sqlx::PgPool;

use crate::tenancy::{
    domain::model::enums::tenancy_domain_error::TenancyDomainError,
    infrastructure::persistence::repositories::tenancy_audit_event_repository::{
        TenancyAuditEventRecord, TenancyAuditEventRepository,
    },
};

pub struct SqlxTenancyAuditEventRepositoryImpl {
    pool: PgPool,
}

impl SqlxTenancyAuditEventRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TenancyAuditEventRepository for SqlxTenancyAuditEventRepositoryImpl {
    async fn save_event(&self, event: &TenancyAuditEventRecord) -> Result<(), TenancyDomainError> {
        let statement = r#"
            INSERT INTO tenant_resolution_events (
                event_id,
                event_name,
                tenant_id,
                detail,
                occurred_at
            )
            VALUES ($1, $2, $3, $4, $5)
        "#;

        sqlx::query(statement)
            .bind(event.event_id())
            .bind(event.event_name())
            .bind(event.tenant_id())
            .bind(event.detail())
            .bind(event.occurred_at())
            .execute(&self.pool)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }
}
