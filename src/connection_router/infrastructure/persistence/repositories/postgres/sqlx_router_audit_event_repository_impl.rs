use async_trait::async_trait;
use sqlx::PgPool;

use crate::connection_router::{
    domain::model::enums::router_domain_error::RouterDomainError,
    infrastructure::persistence::repositories::router_audit_event_repository::{
        RouterAuditEventRecord, RouterAuditEventRepository,
    },
};

pub struct SqlxRouterAuditEventRepositoryImpl {
    admin_pool: PgPool,
}

impl SqlxRouterAuditEventRepositoryImpl {
    pub fn new(admin_pool: PgPool) -> Self {
        Self { admin_pool }
    }
}

#[async_trait]
impl RouterAuditEventRepository for SqlxRouterAuditEventRepositoryImpl {
    async fn save_event(&self, event: &RouterAuditEventRecord) -> Result<(), RouterDomainError> {
        let statement = r#"
            INSERT INTO router_audit_events (
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
            .execute(&self.admin_pool)
            .await
            .map_err(|e| RouterDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }
}
