use proptest::prelude::*;

use super::*;
use crate::error::ErrorKind;
use crate::key_manager::{KeyManager, KeyMaterialType};
use crate::utils;

#[test]
fn test_round_trip_all_key_sizes() {
    for key_size in [16, 24, 32] {
        let key = utils::random_bytes(key_size).unwrap();
        let cipher = AesGcm::new(&key).unwrap();

        let plaintext = b"Hello, world!";
        let aad = b"Additional data";

        let ciphertext = cipher.encrypt(plaintext, aad).unwrap();
        let decrypted = cipher.decrypt(&ciphertext, aad).unwrap();

        assert_eq!(decrypted, plaintext);
    }
}

#[test]
fn test_fresh_nonce_per_encryption() {
    let key = utils::random_bytes(32).unwrap();
    let cipher = AesGcm::new(&key).unwrap();

    let first = cipher.encrypt(b"same message", b"").unwrap();
    let second = cipher.encrypt(b"same message", b"").unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_tampered_ciphertext_fails() {
    let key = utils::random_bytes(32).unwrap();
    let cipher = AesGcm::new(&key).unwrap();

    let mut ciphertext = cipher.encrypt(b"tamper target", b"aad").unwrap();
    // Flip a bit past the nonce prefix
    ciphertext[NONCE_SIZE] ^= 0x01;

    let error = cipher.decrypt(&ciphertext, b"aad").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::PrimitiveFailure);
}

#[test]
fn test_mismatched_associated_data_fails() {
    let key = utils::random_bytes(16).unwrap();
    let cipher = AesGcm::new(&key).unwrap();

    let ciphertext = cipher.encrypt(b"payload", b"right aad").unwrap();
    assert!(cipher.decrypt(&ciphertext, b"wrong aad").is_err());
}

#[test]
fn test_truncated_ciphertext_fails() {
    let key = utils::random_bytes(32).unwrap();
    let cipher = AesGcm::new(&key).unwrap();

    let error = cipher.decrypt(&[0u8; 5], b"").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_invalid_key_length_rejected() {
    let key = utils::random_bytes(10).unwrap();
    let error = AesGcm::new(&key).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_create_key_length_and_version() {
    let manager = AesGcmKeyManager::new();

    for key_size in [16u32, 24, 32] {
        let key = manager
            .create_key(&AesGcmKeyFormat::new(key_size))
            .unwrap();
        assert_eq!(key.key_value().len(), key_size as usize);
        assert_eq!(key.version(), 0);
        assert!(manager.validate_key(&key).is_ok());
    }
}

#[test]
fn test_create_key_draws_fresh_material() {
    let manager = AesGcmKeyManager::new();
    let format = AesGcmKeyFormat::new(32);

    let first = manager.create_key(&format).unwrap();
    let second = manager.create_key(&format).unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_create_key_rejects_bad_format() {
    let manager = AesGcmKeyManager::new();

    let error = manager.create_key(&AesGcmKeyFormat::new(10)).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    assert!(error.to_string().contains(AesGcmKeyManager::KEY_TYPE));
}

#[test]
fn test_validate_key_version_gate() {
    let manager = AesGcmKeyManager::new();

    let too_new = AesGcmKey::new(vec![0u8; 32], 1);
    let error = manager.validate_key(&too_new).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);

    let current = AesGcmKey::new(vec![0u8; 32], 0);
    assert!(manager.validate_key(&current).is_ok());
}

#[test]
fn test_validate_key_size_constraint() {
    let manager = AesGcmKeyManager::new();

    let short = AesGcmKey::new(vec![0u8; 10], 0);
    assert!(manager.validate_key(&short).is_err());

    for key_size in [16, 24, 32] {
        let key = AesGcmKey::new(vec![0u8; key_size], 0);
        assert!(manager.validate_key(&key).is_ok());
    }
}

#[test]
fn test_aead_primitive_round_trip() {
    let manager = AesGcmKeyManager::new();
    let key = manager.create_key(&AesGcmKeyFormat::new(16)).unwrap();

    let aead = manager.primitive::<Box<dyn Aead>>(&key).unwrap();
    let ciphertext = aead.encrypt(b"Hi", b"aad").unwrap();
    assert_eq!(aead.decrypt(&ciphertext, b"aad").unwrap(), b"Hi");
}

#[test]
fn test_unregistered_primitive_fails() {
    #[derive(Debug)]
    struct NotRegistered;

    let manager = AesGcmKeyManager::new();
    let key = manager.create_key(&AesGcmKeyFormat::new(16)).unwrap();

    let error = manager.primitive::<NotRegistered>(&key).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);

    // An all-default key fails the same way: no factory means no primitive,
    // regardless of key content.
    let error = manager
        .primitive::<NotRegistered>(&AesGcmKey::default())
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_manager_metadata() {
    let manager = AesGcmKeyManager::new();
    assert_eq!(manager.key_material_type(), KeyMaterialType::Symmetric);
    assert_eq!(manager.version(), 0);
    assert_eq!(manager.key_type(), "keyloom/aead/aes-gcm");
    assert!(manager.factories().contains::<Box<dyn Aead>>());
}

#[test]
fn test_key_serde_round_trip() {
    let manager = AesGcmKeyManager::new();
    let key = manager.create_key(&AesGcmKeyFormat::new(32)).unwrap();

    let encoded = serde_json::to_string(&key).unwrap();
    let decoded: AesGcmKey = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, key);

    let format = AesGcmKeyFormat::new(24);
    let encoded = serde_json::to_string(&format).unwrap();
    let decoded: AesGcmKeyFormat = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, format);
}

#[test]
fn test_key_debug_redacts_material() {
    let key = AesGcmKey::new(vec![0xAB; 32], 0);
    let rendered = format!("{:?}", key);
    assert!(rendered.contains("[32 bytes]"));
    assert!(!rendered.contains("171"));
    assert!(!rendered.contains("0xAB"));
}

proptest! {
    #[test]
    fn prop_aead_round_trip(
        plaintext in proptest::collection::vec(any::<u8>(), 0..512),
        aad in proptest::collection::vec(any::<u8>(), 0..64),
        key_size in prop_oneof![Just(16usize), Just(24), Just(32)],
    ) {
        let key = utils::random_bytes(key_size).unwrap();
        let cipher = AesGcm::new(&key).unwrap();

        let ciphertext = cipher.encrypt(&plaintext, &aad).unwrap();
        prop_assert_eq!(cipher.decrypt(&ciphertext, &aad).unwrap(), plaintext);
    }

    #[test]
    fn prop_create_key_length_contract(
        key_size in prop_oneof![Just(16u32), Just(24), Just(32)],
    ) {
        let manager = AesGcmKeyManager::new();
        let key = manager.create_key(&AesGcmKeyFormat::new(key_size)).unwrap();
        prop_assert_eq!(key.key_value().len(), key_size as usize);
    }
}
