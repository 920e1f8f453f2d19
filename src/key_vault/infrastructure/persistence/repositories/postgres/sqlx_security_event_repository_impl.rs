use async_trait::async_trait;
use sqlx::PgPool;

use crate::key_vault::{
    domain::model::enums::key_vault_domain_error::KeyVaultDomainError,
    infrastructure::persistence::repositories::security_event_repository::{
        SecurityEventRecord, SecurityEventRepository,
    },
};

pub struct SqlxSecurityEventRepositoryImpl {
    admin_pool: PgPool,
}

impl SqlxSecurityEventRepositoryImpl {
    pub fn new(admin_pool: PgPool) -> Self {
        Self { admin_pool }
    }
}

#[async_trait]
impl SecurityEventRepository for SqlxSecurityEventRepositoryImpl {
    async fn save_event(&self, event: &SecurityEventRecord) -> Result<(), KeyVaultDomainError> {
        let statement = r#"
            INSERT INTO security_events (
                event_id,
                event_name,
                detail,
                occurred_at
            )
            VALUES ($1, $2, $3, $4)
        "#;

        sqlx::query(statement)
            .bind(event.event_id())
            .bind(event.event_name())
            .bind(event.detail())
            .bind(event.occurred_at())
            .execute(&self.admin_pool)
            .await
            .map_err(|e| KeyVaultDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }
}
