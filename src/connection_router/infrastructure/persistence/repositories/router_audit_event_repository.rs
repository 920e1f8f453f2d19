use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::connection_router::domain::model::enums::router_domain_error::RouterDomainError;

#[derive(Clone, Debug)]
pub struct RouterAuditEventRecord {
    event_id: Uuid,
    event_name: String,
    tenant_id: String,
    detail: Option<String>,
    occurred_at: DateTime<Utc>,
}

impl RouterAuditEventRecord {
    pub fn new(
        event_name: impl Into<String>,
        tenant_id: impl Into<String>,
        detail: Option<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            event_name: event_name.into(),
            tenant_id: tenant_id.into(),
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

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

#[async_trait]
pub trait RouterAuditEventRepository: Send + Sync {
    async fn save_event(&self, event: &RouterAuditEventRecord) -> Result<(), RouterDomainError>;
}
