use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead as AeadOps, AeadCore, KeyInit, OsRng, Payload};
use aes_gcm::{Aes128Gcm, Aes256Gcm, Key, Nonce};

use crate::error::{KeyManagerError, KeyManagerResult};

// The aes-gcm crate only aliases the 128- and 256-bit variants.
type Aes192Gcm = aes_gcm::AesGcm<aes::Aes192, U12>;

/// Nonce length prefixed to every ciphertext, in bytes
pub const NONCE_SIZE: usize = 12;

/// Authenticated encryption with associated data
///
/// The capability interface for authenticated encryption. The associated
/// data is authenticated but not encrypted; decryption fails if either the
/// ciphertext or the associated data was tampered with.
///
/// Request this capability from a key manager as `Box<dyn Aead>`.
pub trait Aead: Send + Sync {
    /// Encrypt the plaintext, authenticating the associated data
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> KeyManagerResult<Vec<u8>>;

    /// Decrypt and authenticate a ciphertext produced by
    /// [`encrypt`](Aead::encrypt)
    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> KeyManagerResult<Vec<u8>>;
}

#[derive(Clone)]
enum CipherVariant {
    Aes128(Aes128Gcm),
    Aes192(Aes192Gcm),
    Aes256(Aes256Gcm),
}

/// AES-GCM implementation of the [`Aead`] capability
///
/// Accepts 16-, 24- or 32-byte keys for AES-128, AES-192 and AES-256
/// respectively. Every encryption draws a fresh random 12-byte nonce from
/// the operating system and prefixes it to the ciphertext, so a single
/// cipher instance may encrypt any number of messages.
///
/// # Examples
///
/// ```
/// use keyloom::aead::{Aead, AesGcm};
///
/// let key = [0x42; 32];
/// let cipher = AesGcm::new(&key).unwrap();
///
/// let ciphertext = cipher.encrypt(b"Secret message", b"metadata").unwrap();
/// let decrypted = cipher.decrypt(&ciphertext, b"metadata").unwrap();
/// assert_eq!(decrypted, b"Secret message");
/// ```
#[derive(Clone)]
pub struct AesGcm {
    cipher: CipherVariant,
}

impl std::fmt::Debug for AesGcm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let variant = match self.cipher {
            CipherVariant::Aes128(_) => "[AES-128-GCM Cipher]",
            CipherVariant::Aes192(_) => "[AES-192-GCM Cipher]",
            CipherVariant::Aes256(_) => "[AES-256-GCM Cipher]",
        };
        f.debug_struct("AesGcm").field("cipher", &variant).finish()
    }
}

impl AesGcm {
    /// Create a new AES-GCM cipher with the given key
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not 16, 24 or 32 bytes long.
    pub fn new(key: &[u8]) -> KeyManagerResult<Self> {
        let cipher = match key.len() {
            16 => CipherVariant::Aes128(Aes128Gcm::new(Key::<Aes128Gcm>::from_slice(key))),
            24 => CipherVariant::Aes192(Aes192Gcm::new(Key::<Aes192Gcm>::from_slice(key))),
            32 => CipherVariant::Aes256(Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key))),
            other => {
                return Err(KeyManagerError::invalid_parameter(
                    "key",
                    "16, 24 or 32 bytes",
                    &format!("{} bytes", other),
                ))
            }
        };

        Ok(Self { cipher })
    }
}

impl Aead for AesGcm {
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> KeyManagerResult<Vec<u8>> {
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let payload = Payload {
            msg: plaintext,
            aad: associated_data,
        };

        let ciphertext = match &self.cipher {
            CipherVariant::Aes128(cipher) => cipher.encrypt(&nonce, payload),
            CipherVariant::Aes192(cipher) => cipher.encrypt(&nonce, payload),
            CipherVariant::Aes256(cipher) => cipher.encrypt(&nonce, payload),
        }
        .map_err(|e| {
            KeyManagerError::aead("encrypt", &format!("AES-GCM encryption failed: {}", e))
        })?;

        let mut output = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        output.extend_from_slice(&nonce);
        output.extend_from_slice(&ciphertext);
        Ok(output)
    }

    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> KeyManagerResult<Vec<u8>> {
        if ciphertext.len() < NONCE_SIZE {
            return Err(KeyManagerError::invalid_parameter(
                "ciphertext",
                &format!("at least {} bytes", NONCE_SIZE),
                &format!("{} bytes", ciphertext.len()),
            ));
        }

        let (nonce, body) = ciphertext.split_at(NONCE_SIZE);
        let nonce = Nonce::<U12>::from_slice(nonce);
        let payload = Payload {
            msg: body,
            aad: associated_data,
        };

        match &self.cipher {
            CipherVariant::Aes128(cipher) => cipher.decrypt(nonce, payload),
            CipherVariant::Aes192(cipher) => cipher.decrypt(nonce, payload),
            CipherVariant::Aes256(cipher) => cipher.decrypt(nonce, payload),
        }
        .map_err(|e| {
            KeyManagerError::aead("decrypt", &format!("AES-GCM decryption failed: {}", e))
        })
    }
}
