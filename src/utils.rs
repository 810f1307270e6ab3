/*!
 * Utilities shared across the library
 */

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{KeyManagerError, KeyManagerResult};

/// Generate cryptographically secure random bytes
///
/// Draws from the operating system's randomness source, which is safe to
/// use concurrently from any number of threads.
pub fn random_bytes(length: usize) -> KeyManagerResult<Vec<u8>> {
    let mut bytes = vec![0u8; length];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| KeyManagerError::random_generation(&e.to_string()))?;
    Ok(bytes)
}

/// Constant-time comparison of two byte slices to avoid timing attacks
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    use subtle::ConstantTimeEq;
    a.ct_eq(b).into()
}
