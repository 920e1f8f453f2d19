use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterDomainError {
    #[error("tenant is not registered: {0}")]
    TenantUnknown(String),

    #[error("tenant is deactivated: {0}")]
    TenantInactive(String),

    #[error("tenant connection pool exhausted, retry later")]
    PoolExhausted,

    #[error("tenant connection pool is being disposed, retry after backoff")]
    PoolDisposing,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
