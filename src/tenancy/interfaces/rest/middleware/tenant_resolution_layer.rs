use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use crate::tenancy::{
    application::context_services::tenant_context_scope::TenantContextScope,
    domain::{
        model::value_objects::{
            resolution_signals::ResolutionSignals, tenant_context::TenantContext,
        },
        services::tenant_resolver::TenantResolver,
    },
    infrastructure::persistence::repositories::tenancy_audit_event_repository::{
        TenancyAuditEventRecord, TenancyAuditEventRepository,
    },
};

#[derive(Clone)]
pub struct TenantResolutionLayerState {
    pub resolver: Arc<dyn TenantResolver>,
    pub audit_event_repository: Arc<dyn TenancyAuditEventRepository>,
}

/// Resolves the tenant for every inbound request and runs the remainder of
/// the stack inside the tenant context scope. Unresolved requests pass
/// through unscoped; handlers that require a tenant fail on `require()`.
pub async fn tenant_resolution_layer(
    State(state): State<TenantResolutionLayerState>,
    request: Request,
    next: Next,
) -> Response {
    let signals = signals_from_request(&request);

    match state.resolver.resolve(&signals) {
        Some(resolved) => {
            let context = TenantContext::new(
                resolved.tenant_id().clone(),
                resolved.source(),
                Utc::now(),
            );
            TenantContextScope::establish(context, next.run(request)).await
        }
        None => {
            let repository = state.audit_event_repository.clone();
            let path = signals.path().to_string();
            tokio::spawn(async move {
                let _ = repository
                    .save_event(&TenancyAuditEventRecord::new(
                        "tenant_resolution_failed",
                        None,
                        Some(path),
                        Utc::now(),
                    ))
                    .await;
            });

            next.run(request).await
        }
    }
}

fn signals_from_request(request: &Request) -> ResolutionSignals {
    let headers: HashMap<String, String> = request
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();

    let host = request
        .headers()
        .get(axum::http::header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    ResolutionSignals::new(headers, host, request.uri().path())
}
