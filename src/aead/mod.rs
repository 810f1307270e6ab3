/*!
 * AEAD primitive interface and the bundled AES-GCM key type
 *
 * Defines the authenticated-encryption capability and a complete concrete
 * key type behind it: key and key-format descriptors, an AES-GCM cipher,
 * the factory wiring them together, and a strict key manager.
 */

mod aes_gcm;
mod key_manager;

pub use self::aes_gcm::Aead;
pub use self::aes_gcm::AesGcm;
pub use self::aes_gcm::NONCE_SIZE;
pub use self::key_manager::AesGcmAeadFactory;
pub use self::key_manager::AesGcmKey;
pub use self::key_manager::AesGcmKeyFormat;
pub use self::key_manager::AesGcmKeyManager;

#[cfg(test)]
mod tests;
