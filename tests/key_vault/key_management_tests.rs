use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use tenancy_axum_api::key_vault::domain::{
    model::{
        enums::key_vault_domain_error::KeyVaultDomainError, value_objects::derived_key::DerivedKey,
    },
    services::key_management_service::KeyManagementService,
};

use crate::support::fakes::create_service;

#[tokio::test]
async fn identical_inputs_derive_identical_keys() {
    let (service, _) = create_service(1_000);

    let first = service
        .derive_key("correct horse", Some(b"pepper"), Some(1_000))
        .await
        .expect("derivation should succeed");
    let second = service
        .derive_key("correct horse", Some(b"pepper"), Some(1_000))
        .await
        .expect("derivation should succeed");

    assert_eq!(first.key_bytes(), second.key_bytes());
    assert_eq!(first.salt(), b"pepper");
    assert_eq!(first.iterations(), 1_000);
}

#[tokio::test]
async fn different_salts_derive_different_keys() {
    let (service, _) = create_service(1_000);

    let first = service
        .derive_key("correct horse", Some(b"pepper"), None)
        .await
        .expect("derivation should succeed");
    let second = service
        .derive_key("correct horse", Some(b"paprika"), None)
        .await
        .expect("derivation should succeed");

    assert_ne!(first.key_bytes(), second.key_bytes());
}

#[tokio::test]
async fn omitted_salt_is_sixteen_random_bytes() {
    let (service, _) = create_service(1_000);

    let first = service
        .derive_key("correct horse", None, None)
        .await
        .expect("derivation should succeed");
    let second = service
        .derive_key("correct horse", None, None)
        .await
        .expect("derivation should succeed");

    assert_eq!(first.salt().len(), 16);
    assert_ne!(first.salt(), second.salt());
}

#[tokio::test]
async fn invalid_derivation_inputs_are_rejected() {
    let (service, _) = create_service(1_000);

    let empty_password = service.derive_key("", Some(b"pepper"), None).await;
    let empty_salt = service.derive_key("correct horse", Some(b""), None).await;
    let zero_iterations = service
        .derive_key("correct horse", Some(b"pepper"), Some(0))
        .await;

    assert!(matches!(
        empty_password,
        Err(KeyVaultDomainError::InvalidKeyMaterial(_))
    ));
    assert!(matches!(
        empty_salt,
        Err(KeyVaultDomainError::InvalidKeyMaterial(_))
    ));
    assert!(matches!(
        zero_iterations,
        Err(KeyVaultDomainError::InvalidKeyMaterial(_))
    ));
}

// RFC 7914 section 11 test vectors for PBKDF2-HMAC-SHA256.
#[tokio::test]
async fn derivation_matches_published_test_vectors() {
    let (service, _) = create_service(1_000);

    let one_iteration = service
        .derive_key("passwd", Some(b"salt"), Some(1))
        .await
        .expect("derivation should succeed");
    assert_eq!(
        hex::encode(&one_iteration.key_bytes()[..16]),
        "55ac046e56e3089fec1691c22544b605"
    );

    let many_iterations = service
        .derive_key("Password", Some(b"NaCl"), Some(80_000))
        .await
        .expect("derivation should succeed");
    assert_eq!(
        hex::encode(&many_iterations.key_bytes()[..16]),
        "4ddcd8f60b98be21830cee5ef22701f9"
    );
}

#[tokio::test]
async fn hashed_secret_verifies_and_tampering_fails() {
    let (service, _) = create_service(1_000);

    let stored = service
        .hash_secret("s3cr3t-api-key", None)
        .await
        .expect("hashing should succeed");

    assert_eq!(stored.salt_hex().len(), 64);

    let genuine = service
        .verify_secret("s3cr3t-api-key", stored.hash_hex(), stored.salt_hex())
        .await
        .expect("verification should succeed");
    let altered = service
        .verify_secret("s3cr3t-api-kez", stored.hash_hex(), stored.salt_hex())
        .await
        .expect("verification should succeed");
    let wrong_salt = service
        .verify_secret("s3cr3t-api-key", stored.hash_hex(), "00ff00ff")
        .await
        .expect("verification should succeed");

    assert!(genuine);
    assert!(!altered);
    assert!(!wrong_salt);
}

#[tokio::test]
async fn non_hex_salt_is_rejected() {
    let (service, _) = create_service(1_000);

    let result = service.hash_secret("s3cr3t-api-key", Some("not hex!")).await;

    assert!(matches!(
        result,
        Err(KeyVaultDomainError::InvalidKeyMaterial(_))
    ));
}

#[tokio::test]
async fn generated_keys_decode_to_thirty_two_bytes_and_never_repeat() {
    let (service, _) = create_service(1_000);

    let first = service.generate_secure_key().await;
    let second = service.generate_secure_key().await;

    let decoded = URL_SAFE_NO_PAD
        .decode(&first)
        .expect("key should be url-safe base64");
    assert_eq!(decoded.len(), 32);
    assert_ne!(first, second);
}

#[tokio::test]
async fn rotation_produces_a_fresh_key_and_an_audited_fingerprint_pair() {
    let (service, security_event_repository) = create_service(1_000);

    let old_key = service
        .derive_key("original passphrase", None, None)
        .await
        .expect("derivation should succeed");

    let new_key = service
        .rotate_key(&old_key, "replacement passphrase")
        .await
        .expect("rotation should succeed");

    assert_ne!(new_key.key_bytes(), old_key.key_bytes());
    assert_ne!(new_key.salt(), old_key.salt());
    assert_eq!(new_key.iterations(), old_key.iterations());

    let events = security_event_repository.saved_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_name(), "key_rotated");
    assert_eq!(
        events[0].detail(),
        format!("old={} new={}", old_key.fingerprint(), new_key.fingerprint())
    );
    // Fingerprints are truncated digests; raw key material never reaches
    // the audit trail.
    assert_eq!(old_key.fingerprint().len(), 8);
    assert!(!events[0].detail().contains(&hex::encode(new_key.key_bytes())));
}

#[tokio::test]
async fn rotation_with_an_empty_password_is_rejected() {
    let (service, security_event_repository) = create_service(1_000);

    let old_key = service
        .derive_key("original passphrase", None, None)
        .await
        .expect("derivation should succeed");

    let result = service.rotate_key(&old_key, "").await;

    assert!(matches!(
        result,
        Err(KeyVaultDomainError::InvalidKeyMaterial(_))
    ));
    assert!(security_event_repository.saved_events().is_empty());
}

#[tokio::test]
async fn derived_key_construction_enforces_its_shape() {
    let short = DerivedKey::new(vec![0u8; 5], vec![1u8; 16], 1_000);
    let saltless = DerivedKey::new(vec![0u8; 32], Vec::new(), 1_000);
    let unworked = DerivedKey::new(vec![0u8; 32], vec![1u8; 16], 0);

    assert!(matches!(
        short,
        Err(KeyVaultDomainError::InvalidKeyMaterial(_))
    ));
    assert!(matches!(
        saltless,
        Err(KeyVaultDomainError::InvalidKeyMaterial(_))
    ));
    assert!(matches!(
        unworked,
        Err(KeyVaultDomainError::InvalidKeyMaterial(_))
    ));
}
