use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};

use crate::key_vault::{
    domain::{
        model::enums::key_vault_domain_error::KeyVaultDomainError,
        services::key_management_service::KeyManagementService,
    },
    interfaces::rest::resources::{
        issued_api_key_resource::IssuedApiKeyResource,
        key_vault_error_response_resource::KeyVaultErrorResponseResource,
    },
};

#[derive(Clone)]
pub struct ApiKeyRestControllerState {
    pub key_management_service: Arc<dyn KeyManagementService>,
}

pub fn router(state: ApiKeyRestControllerState) -> Router {
    Router::new()
        .route("/api/v1/admin/api-keys", post(issue_api_key))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/api-keys",
    tag = "key-vault",
    responses(
        (status = 201, description = "Fresh opaque API key with its storable hash", body = IssuedApiKeyResource),
        (status = 500, description = "Infrastructure error", body = KeyVaultErrorResponseResource)
    )
)]
pub async fn issue_api_key(
    State(state): State<ApiKeyRestControllerState>,
) -> Result<(StatusCode, Json<IssuedApiKeyResource>), (StatusCode, Json<KeyVaultErrorResponseResource>)>
{
    let api_key = state.key_management_service.generate_secure_key().await;

    let secret_hash = state
        .key_management_service
        .hash_secret(&api_key, None)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(IssuedApiKeyResource {
            api_key,
            hash_hex: secret_hash.hash_hex().to_string(),
            salt_hex: secret_hash.salt_hex().to_string(),
        }),
    ))
}

fn map_domain_error(
    error: KeyVaultDomainError,
) -> (StatusCode, Json<KeyVaultErrorResponseResource>) {
    let status = match error {
        KeyVaultDomainError::InvalidKeyMaterial(_) => StatusCode::BAD_REQUEST,
        KeyVaultDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(KeyVaultErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
