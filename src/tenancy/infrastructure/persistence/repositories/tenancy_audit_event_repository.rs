use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError;

#[derive(Clone, Debug)]
pub struct TenancyAuditEventRecord {
    event_id: Uuid,
    event_name: String,
    tenant_id: Option<String>,
    detail: Option<String>,
    occurred_at: DateTime<Utc>,
}

impl TenancyAuditEventRecord {
    pub fn new(
        event_name: impl Into<String>,
        tenant_id: Option<String>,
        detail: Option<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            event_name: event_name.into(),
            tenant_id,
            detail,
            occurred_at,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

#[async_trait]
pub trait TenancyAuditEventRepository: Send + Sync {
    async fn save_event(&self, event: &TenancyAuditEventRecord) -> Result<(), TenancyDomainError>;
}
