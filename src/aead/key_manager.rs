use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::aes_gcm::{Aead, AesGcm};
use crate::error::{KeyManagerError, KeyManagerResult};
use crate::key_manager::{
    validate_aes_key_size, validate_version, FactorySet, KeyManager, KeyMaterialType,
    PrimitiveFactory,
};
use crate::utils;

/// Key descriptor for the AES-GCM key type
///
/// Holds the raw key material and a key-format version. Immutable once
/// constructed; typically produced either by an external deserialization
/// layer or by [`AesGcmKeyManager::create_key`]. The material is zeroed
/// when the descriptor is dropped.
#[derive(Clone, Default, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct AesGcmKey {
    key_value: Vec<u8>,
    version: u32,
}

impl AesGcmKey {
    pub fn new(key_value: Vec<u8>, version: u32) -> Self {
        Self { key_value, version }
    }

    /// The raw key material
    pub fn key_value(&self) -> &[u8] {
        &self.key_value
    }

    pub fn version(&self) -> u32 {
        self.version
    }
}

impl std::fmt::Debug for AesGcmKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesGcmKey")
            .field("key_value", &format!("[{} bytes]", self.key_value.len()))
            .field("version", &self.version)
            .finish()
    }
}

impl PartialEq for AesGcmKey {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version && utils::constant_time_eq(&self.key_value, &other.key_value)
    }
}

impl Eq for AesGcmKey {}

/// Key format descriptor for generating new AES-GCM keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AesGcmKeyFormat {
    key_size: u32,
}

impl AesGcmKeyFormat {
    pub fn new(key_size: u32) -> Self {
        Self { key_size }
    }

    /// The requested key material length, in bytes
    pub fn key_size(&self) -> u32 {
        self.key_size
    }
}

/// Factory building the [`Aead`] capability from an [`AesGcmKey`]
///
/// Failures of the underlying cipher construction (for example, material
/// of an unsupported length) propagate verbatim.
pub struct AesGcmAeadFactory;

impl PrimitiveFactory<AesGcmKey> for AesGcmAeadFactory {
    type Primitive = Box<dyn Aead>;

    fn create(&self, key: &AesGcmKey) -> KeyManagerResult<Box<dyn Aead>> {
        let cipher = AesGcm::new(key.key_value())?;
        Ok(Box::new(cipher))
    }
}

/// Key manager for the AES-GCM key type
///
/// A strict manager: `validate_key` enforces the version gate (version 0)
/// and the AES key-size constraint ({16, 24, 32} bytes), and
/// `validate_key_format` applies the same size constraint before
/// generation. Registers one factory, producing the [`Aead`] capability.
///
/// Construct once and share freely; the manager is immutable and safe for
/// concurrent use.
pub struct AesGcmKeyManager {
    factories: FactorySet<AesGcmKey>,
}

impl AesGcmKeyManager {
    /// Highest key-format version this manager accepts
    pub const VERSION: u32 = 0;

    /// Stable identifier for the AES-GCM key type
    pub const KEY_TYPE: &'static str = "keyloom/aead/aes-gcm";

    pub fn new() -> Self {
        Self {
            factories: FactorySet::new().register(AesGcmAeadFactory),
        }
    }
}

impl Default for AesGcmKeyManager {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyManager for AesGcmKeyManager {
    type Key = AesGcmKey;
    type KeyFormat = AesGcmKeyFormat;

    fn validate_key(&self, key: &AesGcmKey) -> KeyManagerResult<()> {
        validate_version(key.version(), Self::VERSION)
            .and_then(|()| validate_aes_key_size(key.key_value().len()))
            .map_err(|e| KeyManagerError::invalid_key(Self::KEY_TYPE, &e.to_string()))
    }

    fn validate_key_format(&self, format: &AesGcmKeyFormat) -> KeyManagerResult<()> {
        validate_aes_key_size(format.key_size() as usize)
            .map_err(|e| KeyManagerError::invalid_key_format(Self::KEY_TYPE, &e.to_string()))
    }

    fn create_key(&self, format: &AesGcmKeyFormat) -> KeyManagerResult<AesGcmKey> {
        self.validate_key_format(format)?;
        let key_value = utils::random_bytes(format.key_size() as usize)?;
        log::debug!(
            "generated new {} key ({} bytes)",
            Self::KEY_TYPE,
            key_value.len()
        );
        Ok(AesGcmKey::new(key_value, Self::VERSION))
    }

    fn key_material_type(&self) -> KeyMaterialType {
        KeyMaterialType::Symmetric
    }

    fn version(&self) -> u32 {
        Self::VERSION
    }

    fn key_type(&self) -> &str {
        Self::KEY_TYPE
    }

    fn factories(&self) -> &FactorySet<AesGcmKey> {
        &self.factories
    }
}
