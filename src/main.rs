use std::sync::Arc;

use axum::{Router, middleware};
use dotenvy::dotenv;
use sqlx::{PgPool, migrate};
use tenancy_axum_api::{
    config::app_config::AppConfig,
    connection_router::{
        build_connection_router,
        infrastructure::persistence::repositories::tenant_connection_router_repository::TenantConnectionRouterRepository,
        interfaces::rest::resources::{
            router_error_response_resource::RouterErrorResponseResource,
            session_ping_resource::SessionPingResource,
        },
    },
    key_vault::{
        build_key_vault_router,
        interfaces::rest::resources::{
            issued_api_key_resource::IssuedApiKeyResource,
            key_vault_error_response_resource::KeyVaultErrorResponseResource,
        },
    },
    tenancy::{
        build_tenancy_router, build_tenant_resolution_state,
        interfaces::rest::{
            middleware::tenant_resolution_layer::tenant_resolution_layer,
            resources::{
                tenancy_error_response_resource::TenancyErrorResponseResource,
                tenant_context_resource::TenantContextResource,
            },
        },
    },
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        tenancy_axum_api::tenancy::interfaces::rest::controllers::tenant_context_rest_controller::current_tenant_context,
        tenancy_axum_api::connection_router::interfaces::rest::controllers::session_rest_controller::ping_session,
        tenancy_axum_api::connection_router::interfaces::rest::controllers::session_rest_controller::dispose_tenant_pool,
        tenancy_axum_api::key_vault::interfaces::rest::controllers::api_key_rest_controller::issue_api_key
    ),
    components(
        schemas(
            TenantContextResource,
            TenancyErrorResponseResource,
            SessionPingResource,
            RouterErrorResponseResource,
            IssuedApiKeyResource,
            KeyVaultErrorResponseResource
        )
    ),
    tags(
        (name = "tenancy", description = "Tenant resolution and request-scoped tenant context"),
        (name = "connection-router", description = "Per-tenant database connection routing"),
        (name = "key-vault", description = "Tenant key derivation and secret protection")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env();

    let admin_pool = PgPool::connect(&config.admin_database_url())
        .await
        .expect("failed to connect to admin database");

    migrate!("./migrations")
        .run(&admin_pool)
        .await
        .expect("failed to run admin database migrations");

    let resolution_state = build_tenant_resolution_state(&config, admin_pool.clone());
    let tenancy_router = build_tenancy_router();
    let (session_router, connection_router) =
        build_connection_router(&config, admin_pool.clone());
    let key_vault_router = build_key_vault_router(&config, admin_pool);

    let app = Router::new()
        .merge(tenancy_router)
        .merge(session_router)
        .merge(key_vault_router)
        .layer(middleware::from_fn_with_state(
            resolution_state,
            tenant_resolution_layer,
        ))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!(port = config.port, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(connection_router))
        .await
        .expect("failed to start axum server");
}

async fn shutdown_signal(connection_router: Arc<dyn TenantConnectionRouterRepository>) {
    let _ = tokio::signal::ctrl_c().await;

    info!("shutdown signal received, disposing tenant pools");
    if let Err(error) = connection_router.close_all().await {
        warn!(error = %error, "failed to dispose tenant pools cleanly");
    }
}
