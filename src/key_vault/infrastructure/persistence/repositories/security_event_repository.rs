use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::key_vault::domain::model::enums::key_vault_domain_error::KeyVaultDomainError;

#[derive(Clone, Debug)]
pub struct SecurityEventRecord {
    event_id: Uuid,
    event_name: String,
    detail: String,
    occurred_at: DateTime<Utc>,
}

impl SecurityEventRecord {
    pub fn new(
        event_name: impl Into<String>,
        detail: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            event_name: event_name.into(),
            detail: detail.into(),
            occurred_at,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

#[async_trait]
pub trait SecurityEventRepository: Send + Sync {
    async fn save_event(&self, event: &SecurityEventRecord) -> Result<(), KeyVaultDomainError>;
}
