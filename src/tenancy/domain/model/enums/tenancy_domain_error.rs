use thiserror::Error;

#[derive(Debug, Error)]
pub enum TenancyDomainError {
    #[error("tenant identifier is not a lower-case url-safe identifier")]
    InvalidTenantIdentifier,

    /// A resolution miss is modelled as absence inside the resolver chain;
    /// this variant is the typed form for callers that treat an unresolved
    /// request as a hard failure.
    #[error("no resolution strategy matched the request")]
    ResolutionFailed,

    #[error("tenant context is not established for this request flow")]
    MissingContext,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
