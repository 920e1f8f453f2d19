use async_trait::async_trait;

use crate::{
    connection_router::domain::model::{
        entities::tenant_registration::TenantRegistration,
        enums::router_domain_error::RouterDomainError,
    },
    tenancy::domain::model::value_objects::tenant_identifier::TenantIdentifier,
};

#[async_trait]
pub trait TenantRegistryRepository: Send + Sync {
    async fn find_registration(
        &self,
        tenant_id: &TenantIdentifier,
    ) -> Result<Option<TenantRegistration>, RouterDomainError>;
}
