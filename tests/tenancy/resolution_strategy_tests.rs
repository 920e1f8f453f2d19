use tenancy_axum_api::tenancy::{
    application::resolution_strategies::{
        claim_resolution_strategy::ClaimResolutionStrategy,
        header_resolution_strategy::HeaderResolutionStrategy,
        path_resolution_strategy::PathResolutionStrategy,
        subdomain_resolution_strategy::SubdomainResolutionStrategy,
    },
    domain::services::tenant_resolution_strategy::TenantResolutionStrategy,
};

use crate::support::fixtures::{bearer_token_with_claim, signals_with};

#[test]
fn claim_strategy_reads_configured_claim_without_verification() {
    let strategy = ClaimResolutionStrategy::new("tenant_id");
    let token = bearer_token_with_claim("tenant_id", "acme");
    let signals = signals_with(&[("Authorization", token.as_str())], "app.com", "/");

    let resolved = strategy.resolve(&signals).expect("claim should resolve");
    assert_eq!(resolved.value(), "acme");
}

#[test]
fn claim_strategy_is_absent_for_missing_header_wrong_scheme_or_garbage_token() {
    let strategy = ClaimResolutionStrategy::new("tenant_id");

    let missing = signals_with(&[], "app.com", "/");
    assert!(strategy.resolve(&missing).is_none());

    let wrong_scheme = signals_with(&[("Authorization", "Basic dXNlcjpwYXNz")], "app.com", "/");
    assert!(strategy.resolve(&wrong_scheme).is_none());

    let two_segments = signals_with(&[("Authorization", "Bearer a.b")], "app.com", "/");
    assert!(strategy.resolve(&two_segments).is_none());

    let not_base64 = signals_with(&[("Authorization", "Bearer x.!!!!.y")], "app.com", "/");
    assert!(strategy.resolve(&not_base64).is_none());
}

#[test]
fn claim_strategy_is_absent_when_claim_key_is_missing_or_empty() {
    let strategy = ClaimResolutionStrategy::new("tenant_id");

    let other_claim = bearer_token_with_claim("org", "acme");
    let signals = signals_with(&[("Authorization", other_claim.as_str())], "app.com", "/");
    assert!(strategy.resolve(&signals).is_none());

    let empty_claim = bearer_token_with_claim("tenant_id", "");
    let signals = signals_with(&[("Authorization", empty_claim.as_str())], "app.com", "/");
    assert!(strategy.resolve(&signals).is_none());
}

#[test]
fn subdomain_strategy_returns_first_label_of_three_label_hosts() {
    let strategy = SubdomainResolutionStrategy;

    let signals = signals_with(&[], "acme.app.com", "/");
    let resolved = strategy.resolve(&signals).expect("subdomain should resolve");
    assert_eq!(resolved.value(), "acme");
}

#[test]
fn subdomain_strategy_is_absent_for_hosts_with_fewer_than_three_labels() {
    let strategy = SubdomainResolutionStrategy;

    assert!(strategy.resolve(&signals_with(&[], "app.com", "/")).is_none());
    assert!(strategy.resolve(&signals_with(&[], "localhost", "/")).is_none());
}

#[test]
fn subdomain_strategy_rejects_every_reserved_label() {
    let strategy = SubdomainResolutionStrategy;

    for reserved in ["www", "api", "staging", "dev"] {
        let host = format!("{reserved}.app.com");
        assert!(
            strategy.resolve(&signals_with(&[], &host, "/")).is_none(),
            "{reserved} must never resolve as a tenant"
        );
    }
}

#[test]
fn subdomain_strategy_strips_the_port_and_normalizes_case() {
    let strategy = SubdomainResolutionStrategy;

    let signals = signals_with(&[], "ACME.app.com:8081", "/");
    let resolved = strategy.resolve(&signals).expect("subdomain should resolve");
    assert_eq!(resolved.value(), "acme");
}

#[test]
fn header_strategy_uses_the_configured_header_name() {
    let strategy = HeaderResolutionStrategy::new("x-tenant-id");

    let signals = signals_with(&[("X-Tenant-ID", "beta")], "app.com", "/");
    let resolved = strategy.resolve(&signals).expect("header should resolve");
    assert_eq!(resolved.value(), "beta");

    let other_name = HeaderResolutionStrategy::new("x-org");
    assert!(other_name.resolve(&signals).is_none());
}

#[test]
fn header_strategy_is_absent_for_missing_or_blank_values() {
    let strategy = HeaderResolutionStrategy::new("x-tenant-id");

    assert!(strategy.resolve(&signals_with(&[], "app.com", "/")).is_none());
    assert!(
        strategy
            .resolve(&signals_with(&[("X-Tenant-ID", "  ")], "app.com", "/"))
            .is_none()
    );
}

#[test]
fn path_strategy_matches_the_tenants_prefix_only() {
    let strategy = PathResolutionStrategy;

    let matching = signals_with(&[], "app.com", "/v1/tenants/widgetco/accounts");
    let resolved = strategy.resolve(&matching).expect("path should resolve");
    assert_eq!(resolved.value(), "widgetco");

    assert!(
        strategy
            .resolve(&signals_with(&[], "app.com", "/v2/tenants/widgetco"))
            .is_none()
    );
    assert!(
        strategy
            .resolve(&signals_with(&[], "app.com", "/v1/accounts/widgetco"))
            .is_none()
    );
    assert!(
        strategy
            .resolve(&signals_with(&[], "app.com", "/v1/tenants"))
            .is_none()
    );
}

#[test]
fn path_strategy_is_absent_for_empty_or_shifted_segments() {
    let strategy = PathResolutionStrategy;

    // An empty identifier segment must never make a later segment resolve.
    assert!(
        strategy
            .resolve(&signals_with(&[], "app.com", "/v1/tenants//accounts"))
            .is_none()
    );
    assert!(
        strategy
            .resolve(&signals_with(&[], "app.com", "/v1/tenants/"))
            .is_none()
    );
    // A doubled leading slash shifts the prefix out of position.
    assert!(
        strategy
            .resolve(&signals_with(&[], "app.com", "//v1/tenants/widgetco"))
            .is_none()
    );
}

#[test]
fn strategies_reject_candidates_that_are_not_valid_identifiers() {
    let strategy = HeaderResolutionStrategy::new("x-tenant-id");

    let signals = signals_with(&[("X-Tenant-ID", "not a tenant!")], "app.com", "/");
    assert!(strategy.resolve(&signals).is_none());
}
