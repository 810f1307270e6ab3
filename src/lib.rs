/*!
 * keyloom Key-Manager Library
 *
 * This library implements the generic key-manager abstraction at the center
 * of a key-management system: a mechanism that turns an opaque,
 * algorithm-specific key descriptor into one or more usable cryptographic
 * primitive instances, while enforcing structural validation and
 * version-compatibility rules before any key material is trusted.
 *
 * The main pieces are:
 *
 * - The [`KeyManager`] contract every concrete key manager implements
 * - [`PrimitiveFactory`] and [`FactorySet`], the type-erased registry a
 *   manager dispatches primitive construction through, so a single key type
 *   can back several unrelated capabilities requested by interface rather
 *   than by concrete implementation
 * - Reusable validation helpers for version gating and key-size checks
 * - A bundled AES-GCM key type with an authenticated-encryption primitive
 *
 * Key managers are immutable after construction and safe for
 * unsynchronized concurrent use. Dispatch never validates implicitly:
 * validation is an explicit step, so a caller may validate a key once and
 * build primitives from it many times.
 */

/// Common error types for key-manager operations
pub mod error;

/// The key-manager contract, factory registry and validation helpers
pub mod key_manager;

/// AEAD primitive interface and the bundled AES-GCM key type
pub mod aead;

/// Utilities for cryptographic operations
pub mod utils;

// Re-export main types for convenience
pub use error::ErrorKind;
pub use error::KeyManagerError;
pub use error::KeyManagerResult;
pub use key_manager::validate_aes_key_size;
pub use key_manager::validate_key_size;
pub use key_manager::validate_version;
pub use key_manager::FactorySet;
pub use key_manager::KeyManager;
pub use key_manager::KeyMaterialType;
pub use key_manager::PrimitiveFactory;

/// Provides the most commonly used types in one import
pub mod prelude {
    pub use crate::aead::Aead;
    pub use crate::aead::AesGcm;
    pub use crate::aead::AesGcmKey;
    pub use crate::aead::AesGcmKeyFormat;
    pub use crate::aead::AesGcmKeyManager;
    pub use crate::error::ErrorKind;
    pub use crate::error::KeyManagerError;
    pub use crate::error::KeyManagerResult;
    pub use crate::key_manager::validate_aes_key_size;
    pub use crate::key_manager::validate_key_size;
    pub use crate::key_manager::validate_version;
    pub use crate::key_manager::FactorySet;
    pub use crate::key_manager::KeyManager;
    pub use crate::key_manager::KeyMaterialType;
    pub use crate::key_manager::PrimitiveFactory;
}
