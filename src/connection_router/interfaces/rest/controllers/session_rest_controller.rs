use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    connection_router::{
        domain::model::enums::router_domain_error::RouterDomainError,
        infrastructure::persistence::repositories::tenant_connection_router_repository::TenantConnectionRouterRepository,
        interfaces::rest::resources::{
            router_error_response_resource::RouterErrorResponseResource,
            session_ping_resource::SessionPingResource,
        },
    },
    tenancy::{
        application::context_services::tenant_context_scope::TenantContextScope,
        domain::model::value_objects::tenant_identifier::TenantIdentifier,
    },
};

#[derive(Clone)]
pub struct SessionRestControllerState {
    pub connection_router: Arc<dyn TenantConnectionRouterRepository>,
}

pub fn router(state: SessionRestControllerState) -> Router {
    Router::new()
        .route("/api/v1/session/ping", get(ping_session))
        .route(
            "/api/v1/admin/tenants/:tenant_id/dispose",
            post(dispose_tenant_pool),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/v1/session/ping",
    tag = "connection-router",
    responses(
        (status = 200, description = "Scoped tenant session verified", body = SessionPingResource),
        (status = 401, description = "No tenant context established", body = RouterErrorResponseResource),
        (status = 403, description = "Tenant is deactivated", body = RouterErrorResponseResource),
        (status = 404, description = "Tenant is not registered", body = RouterErrorResponseResource),
        (status = 503, description = "Pool exhausted or disposing, retryable", body = RouterErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = RouterErrorResponseResource)
    )
)]
pub async fn ping_session(
    State(state): State<SessionRestControllerState>,
) -> Result<Json<SessionPingResource>, (StatusCode, Json<RouterErrorResponseResource>)> {
    let context = TenantContextScope::require().map_err(|error| {
        (
            StatusCode::UNAUTHORIZED,
            Json(RouterErrorResponseResource {
                message: error.to_string(),
            }),
        )
    })?;

    let mut session = state
        .connection_router
        .get_session(&context)
        .await
        .map_err(map_domain_error)?;

    sqlx::query("SELECT 1")
        .execute(session.connection())
        .await
        .map_err(|e| map_domain_error(RouterDomainError::InfrastructureError(e.to_string())))?;

    Ok(Json(SessionPingResource {
        tenant_id: session.tenant_id().to_string(),
        database: "ok".to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/tenants/{tenant_id}/dispose",
    tag = "connection-router",
    params(
        ("tenant_id" = String, Path, description = "Tenant identifier")
    ),
    responses(
        (status = 204, description = "Pool disposed (no-op when no pool exists)"),
        (status = 400, description = "Invalid tenant identifier", body = RouterErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = RouterErrorResponseResource)
    )
)]
pub async fn dispose_tenant_pool(
    State(state): State<SessionRestControllerState>,
    Path(tenant_id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<RouterErrorResponseResource>)> {
    let tenant_id = TenantIdentifier::new(tenant_id).map_err(|error| {
        (
            StatusCode::BAD_REQUEST,
            Json(RouterErrorResponseResource {
                message: error.to_string(),
            }),
        )
    })?;

    state
        .connection_router
        .dispose(&tenant_id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

fn map_domain_error(error: RouterDomainError) -> (StatusCode, Json<RouterErrorResponseResource>) {
    let status = match error {
        RouterDomainError::TenantUnknown(_) => StatusCode::NOT_FOUND,
        RouterDomainError::TenantInactive(_) => StatusCode::FORBIDDEN,
        RouterDomainError::PoolExhausted | RouterDomainError::PoolDisposing => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        RouterDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(RouterErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
