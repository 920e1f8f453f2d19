use std::fmt;

use crate::tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError;

lazy_static::lazy_static! {
    static ref TENANT_IDENTIFIER_REGEX: regex::Regex =
        regex::Regex::new("^[a-z0-9][a-z0-9_-]{0,62}$").expect("valid regex");
}

/// Opaque, globally unique tenant name. Only ever produced by a resolution
/// strategy; arbitrary user input never becomes a `TenantIdentifier` without
/// passing this constructor.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TenantIdentifier(String);

impl TenantIdentifier {
    pub fn new(value: String) -> Result<Self, TenancyDomainError> {
        let normalized = value.trim().to_lowercase();

        if !TENANT_IDENTIFIER_REGEX.is_match(&normalized) {
            return Err(TenancyDomainError::InvalidTenantIdentifier);
        }

        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
