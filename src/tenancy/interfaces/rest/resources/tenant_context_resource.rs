use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct TenantContextResource {
    pub tenant_id: String,
    pub source: String,
    pub resolved_at: String,
}
