/*!
 * Reusable validation checks for key managers
 *
 * Stateless helpers that concrete key managers compose inside their
 * `validate_key` and `validate_key_format` implementations.
 */

use crate::error::{KeyManagerError, KeyManagerResult};

/// Key sizes accepted by the AES cipher family, in bytes
pub const AES_KEY_SIZES: [usize; 3] = [16, 24, 32];

/// Check a key version against the highest version a manager supports
///
/// # Examples
///
/// ```
/// use keyloom::validate_version;
///
/// assert!(validate_version(0, 0).is_ok());
/// assert!(validate_version(1, 0).is_err());
/// ```
pub fn validate_version(candidate: u32, max_version: u32) -> KeyManagerResult<()> {
    if candidate > max_version {
        return Err(KeyManagerError::invalid_parameter(
            "version",
            &format!("<= {}", max_version),
            &candidate.to_string(),
        ));
    }
    Ok(())
}

/// Check a key material length against an algorithm's allowed sizes
pub fn validate_key_size(key_size: usize, allowed: &[usize]) -> KeyManagerResult<()> {
    if !allowed.contains(&key_size) {
        return Err(KeyManagerError::invalid_parameter(
            "key size",
            &format!("one of {:?} bytes", allowed),
            &format!("{} bytes", key_size),
        ));
    }
    Ok(())
}

/// Check a key material length against the AES family sizes {16, 24, 32}
pub fn validate_aes_key_size(key_size: usize) -> KeyManagerResult<()> {
    validate_key_size(key_size, &AES_KEY_SIZES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_validate_version_bounds() {
        assert!(validate_version(0, 0).is_ok());
        assert!(validate_version(3, 7).is_ok());
        assert!(validate_version(7, 7).is_ok());

        let error = validate_version(8, 7).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        assert!(error.to_string().contains("version"));
    }

    #[test]
    fn test_validate_key_size_membership() {
        assert!(validate_key_size(16, &[16, 24, 32]).is_ok());
        assert!(validate_key_size(64, &[64]).is_ok());

        let error = validate_key_size(10, &[16, 24, 32]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_validate_aes_key_size() {
        for size in AES_KEY_SIZES {
            assert!(validate_aes_key_size(size).is_ok());
        }
        assert!(validate_aes_key_size(0).is_err());
        assert!(validate_aes_key_size(10).is_err());
        assert!(validate_aes_key_size(33).is_err());
    }
}
