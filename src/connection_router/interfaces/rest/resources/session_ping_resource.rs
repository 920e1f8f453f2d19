use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SessionPingResource {
    pub tenant_id: String,
    pub database: String,
}
