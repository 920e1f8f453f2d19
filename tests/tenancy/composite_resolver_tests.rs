use std::sync::Arc;

use tenancy_axum_api::tenancy::{
    application::{
        resolution_strategies::{
            claim_resolution_strategy::ClaimResolutionStrategy,
            header_resolution_strategy::HeaderResolutionStrategy,
            path_resolution_strategy::PathResolutionStrategy,
            subdomain_resolution_strategy::SubdomainResolutionStrategy,
        },
        resolver_services::composite_tenant_resolver_impl::CompositeTenantResolverImpl,
    },
    domain::{
        model::enums::resolution_source::ResolutionSource,
        services::{
            tenant_resolution_strategy::TenantResolutionStrategy, tenant_resolver::TenantResolver,
        },
    },
};

use crate::support::{
    fakes::CountingStrategy,
    fixtures::{bearer_token_with_claim, signals_with},
};

fn canonical_chain() -> CompositeTenantResolverImpl {
    CompositeTenantResolverImpl::new(vec![
        Arc::new(ClaimResolutionStrategy::new("tenant_id")),
        Arc::new(SubdomainResolutionStrategy),
        Arc::new(HeaderResolutionStrategy::new("x-tenant-id")),
        Arc::new(PathResolutionStrategy),
    ])
}

#[test]
fn claim_wins_over_a_conflicting_subdomain() {
    let resolver = canonical_chain();
    let token = bearer_token_with_claim("tenant_id", "fromtoken");
    let signals = signals_with(
        &[("Authorization", token.as_str())],
        "fromhost.app.com",
        "/",
    );

    let resolved = resolver.resolve(&signals).expect("claim should resolve");
    assert_eq!(resolved.tenant_id().value(), "fromtoken");
    assert_eq!(resolved.source(), ResolutionSource::Claim);
}

#[test]
fn subdomain_wins_over_the_header_in_the_canonical_order() {
    // Host carries `acme`, header carries `beta`; subdomain precedes header
    // in the canonical chain so the header strategy is never reached.
    let resolver = canonical_chain();
    let signals = signals_with(&[("X-Tenant-ID", "beta")], "acme.app.com", "/");

    let resolved = resolver.resolve(&signals).expect("subdomain should resolve");
    assert_eq!(resolved.tenant_id().value(), "acme");
    assert_eq!(resolved.source(), ResolutionSource::Subdomain);
}

#[test]
fn header_wins_when_configured_ahead_of_the_subdomain() {
    let resolver = CompositeTenantResolverImpl::new(vec![
        Arc::new(ClaimResolutionStrategy::new("tenant_id")),
        Arc::new(HeaderResolutionStrategy::new("x-tenant-id")),
        Arc::new(SubdomainResolutionStrategy),
        Arc::new(PathResolutionStrategy),
    ]);
    let signals = signals_with(&[("X-Tenant-ID", "beta")], "acme.app.com", "/");

    let resolved = resolver.resolve(&signals).expect("header should resolve");
    assert_eq!(resolved.tenant_id().value(), "beta");
    assert_eq!(resolved.source(), ResolutionSource::Header);
}

#[test]
fn path_resolves_when_no_other_signal_is_present() {
    let resolver = canonical_chain();
    let signals = signals_with(&[], "app.com", "/v1/tenants/widgetco/accounts");

    let resolved = resolver.resolve(&signals).expect("path should resolve");
    assert_eq!(resolved.tenant_id().value(), "widgetco");
    assert_eq!(resolved.source(), ResolutionSource::Path);
}

#[test]
fn resolution_is_absent_when_every_strategy_misses() {
    let resolver = canonical_chain();
    let signals = signals_with(&[], "app.com", "/accounts");

    assert!(resolver.resolve(&signals).is_none());
}

#[test]
fn later_strategies_are_not_consulted_after_a_hit() {
    let first = Arc::new(CountingStrategy::new(ResolutionSource::Header, Some("acme")));
    let second = Arc::new(CountingStrategy::new(ResolutionSource::Path, Some("other")));
    let resolver = CompositeTenantResolverImpl::new(vec![
        first.clone() as Arc<dyn TenantResolutionStrategy>,
        second.clone() as Arc<dyn TenantResolutionStrategy>,
    ]);
    let signals = signals_with(&[], "app.com", "/");

    let resolved = resolver.resolve(&signals).expect("first should resolve");
    assert_eq!(resolved.tenant_id().value(), "acme");
    assert_eq!(first.calls(), 1);
    assert_eq!(second.calls(), 0);
}
