use serde::{Deserialize, Serialize};

use crate::error::KeyManagerResult;
use crate::key_manager::factory::FactorySet;

/// Classification of the key material a key manager handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyMaterialType {
    /// Secret material shared between the communicating parties
    Symmetric,
    /// The private half of an asymmetric key pair
    AsymmetricPrivate,
    /// The public half of an asymmetric key pair
    AsymmetricPublic,
    /// Material held by a remote system, such as an HSM or KMS
    Remote,
}

/// The contract every concrete key manager implements
///
/// A key manager ties one key descriptor type to the primitives that can be
/// built from it. It validates keys and key formats, generates new keys
/// from a format, reports static metadata about the key type it handles,
/// and dispatches primitive construction through its [`FactorySet`].
///
/// Implementations are immutable after construction: the factory set and
/// all metadata are fixed for the manager's lifetime, every operation takes
/// `&self`, and the `Send + Sync` bound makes a single long-lived manager
/// instance safe for unsynchronized concurrent use from any number of
/// threads.
///
/// Validation is never invoked implicitly. [`primitive`](KeyManager::primitive)
/// trusts that the caller has validated the key if validation was required,
/// so a caller may validate once and dispatch many times. A permissive
/// manager whose validators accept everything is legal.
///
/// # Examples
///
/// Generating a key and building an AEAD primitive with the bundled
/// AES-GCM manager:
///
/// ```
/// use keyloom::aead::{Aead, AesGcmKeyFormat, AesGcmKeyManager};
/// use keyloom::KeyManager;
///
/// let manager = AesGcmKeyManager::new();
///
/// let format = AesGcmKeyFormat::new(32);
/// manager.validate_key_format(&format).unwrap();
///
/// let key = manager.create_key(&format).unwrap();
/// manager.validate_key(&key).unwrap();
///
/// let aead = manager.primitive::<Box<dyn Aead>>(&key).unwrap();
/// let ciphertext = aead.encrypt(b"Hi", b"aad").unwrap();
/// assert_eq!(aead.decrypt(&ciphertext, b"aad").unwrap(), b"Hi");
/// ```
pub trait KeyManager: Send + Sync {
    /// The key descriptor type this manager handles
    type Key: 'static;
    /// The descriptor type used to generate new keys
    type KeyFormat;

    /// Check a key already in hand for structural and semantic defects
    ///
    /// Typical checks are a version gate against [`version`](KeyManager::version)
    /// and an algorithm-specific constraint on the material length. Pure and
    /// side-effect free; safe to call repeatedly.
    fn validate_key(&self, key: &Self::Key) -> KeyManagerResult<()>;

    /// Check a key format before it is used to generate a key
    fn validate_key_format(&self, format: &Self::KeyFormat) -> KeyManagerResult<()>;

    /// Generate a new key from the given format
    ///
    /// The produced key's material length equals the length the format
    /// requests, with the material drawn from a cryptographically secure
    /// randomness source. Fails only if the format is structurally
    /// unusable.
    fn create_key(&self, format: &Self::KeyFormat) -> KeyManagerResult<Self::Key>;

    /// Static classification of the key material this manager handles
    fn key_material_type(&self) -> KeyMaterialType;

    /// The highest key version this manager accepts
    fn version(&self) -> u32;

    /// Stable, globally unique identifier for the key type this manager
    /// handles
    fn key_type(&self) -> &str;

    /// The primitive factories registered at construction time
    fn factories(&self) -> &FactorySet<Self::Key>;

    /// Build a primitive of type `P` from the given key
    ///
    /// Dispatches to the factory registered for `P`, identified by type,
    /// so callers name the capability they want rather than a concrete
    /// implementation. Fails with an invalid-argument error naming this
    /// manager's key type if no factory for `P` was registered. Does not
    /// validate the key; see the trait-level documentation.
    fn primitive<P: 'static>(&self, key: &Self::Key) -> KeyManagerResult<P> {
        self.factories().create(key, self.key_type())
    }
}
