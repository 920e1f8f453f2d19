use axum::{Json, Router, http::StatusCode, routing::get};

use crate::tenancy::{
    application::context_services::tenant_context_scope::TenantContextScope,
    domain::model::enums::tenancy_domain_error::TenancyDomainError,
    interfaces::rest::resources::{
        tenancy_error_response_resource::TenancyErrorResponseResource,
        tenant_context_resource::TenantContextResource,
    },
};

pub fn router() -> Router {
    Router::new().route("/api/v1/tenant-context", get(current_tenant_context))
}

#[utoipa::path(
    get,
    path = "/api/v1/tenant-context",
    tag = "tenancy",
    responses(
        (status = 200, description = "Resolved tenant context for this request", body = TenantContextResource),
        (status = 401, description = "No tenant context established", body = TenancyErrorResponseResource)
    )
)]
pub async fn current_tenant_context()
-> Result<Json<TenantContextResource>, (StatusCode, Json<TenancyErrorResponseResource>)> {
    let context = TenantContextScope::require().map_err(map_domain_error)?;

    Ok(Json(TenantContextResource {
        tenant_id: context.tenant_id().to_string(),
        source: context.source().as_str().to_string(),
        resolved_at: context.resolved_at().to_rfc3339(),
    }))
}

fn map_domain_error(
    error: TenancyDomainError,
) -> (StatusCode, Json<TenancyErrorResponseResource>) {
    let status = match error {
        TenancyDomainError::MissingContext => StatusCode::UNAUTHORIZED,
        TenancyDomainError::InvalidTenantIdentifier | TenancyDomainError::ResolutionFailed => {
            StatusCode::BAD_REQUEST
        }
        TenancyDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(TenancyErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
