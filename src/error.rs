/*!
 * Error Handling for the keyloom Key-Manager Library
 *
 * Provides the error type shared by key managers, primitive factories and
 * the bundled AEAD implementation, together with a coarse error-kind
 * classification that callers can branch on.
 */

use thiserror::Error;

/// Error type for all key-manager operations
#[derive(Debug, Error)]
pub enum KeyManagerError {
    #[error("no primitive factory registered: key manager for '{key_type}' cannot build '{primitive}'")]
    NoFactory { key_type: String, primitive: String },

    #[error("invalid key for '{key_type}': {cause}")]
    InvalidKey { key_type: String, cause: String },

    #[error("invalid key format for '{key_type}': {cause}")]
    InvalidKeyFormat { key_type: String, cause: String },

    #[error("invalid parameter '{parameter}': expected {expected}, got {actual}")]
    InvalidParameter {
        parameter: String,
        expected: String,
        actual: String,
    },

    #[error("AEAD operation failed: {operation} - {cause}")]
    Aead { operation: String, cause: String },

    #[error("random number generation failed: {cause}")]
    RandomGeneration { cause: String },
}

/// Coarse classification of [`KeyManagerError`] values
///
/// Most failures in this library are caller errors of one kind: a request
/// that cannot be satisfied given the arguments (`InvalidArgument`). The
/// remaining kinds separate failures originating inside a primitive
/// implementation, which are propagated with their original cause rather
/// than reinterpreted, from internal failures of the library itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request cannot succeed for these arguments: an unregistered
    /// primitive was asked for, or a key, key format or parameter failed
    /// structural validation
    InvalidArgument,
    /// The underlying primitive implementation rejected the operation;
    /// the original cause is carried in the message verbatim
    PrimitiveFailure,
    /// A failure internal to the library, such as the secure randomness
    /// source being unavailable
    Internal,
}

impl KeyManagerError {
    /// Get the coarse classification for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            KeyManagerError::NoFactory { .. } => ErrorKind::InvalidArgument,
            KeyManagerError::InvalidKey { .. } => ErrorKind::InvalidArgument,
            KeyManagerError::InvalidKeyFormat { .. } => ErrorKind::InvalidArgument,
            KeyManagerError::InvalidParameter { .. } => ErrorKind::InvalidArgument,
            KeyManagerError::Aead { .. } => ErrorKind::PrimitiveFailure,
            KeyManagerError::RandomGeneration { .. } => ErrorKind::Internal,
        }
    }
}

/// Convenience constructors for common error types
impl KeyManagerError {
    pub fn no_factory(key_type: &str, primitive: &str) -> Self {
        KeyManagerError::NoFactory {
            key_type: key_type.to_string(),
            primitive: primitive.to_string(),
        }
    }

    pub fn invalid_key(key_type: &str, cause: &str) -> Self {
        KeyManagerError::InvalidKey {
            key_type: key_type.to_string(),
            cause: cause.to_string(),
        }
    }

    pub fn invalid_key_format(key_type: &str, cause: &str) -> Self {
        KeyManagerError::InvalidKeyFormat {
            key_type: key_type.to_string(),
            cause: cause.to_string(),
        }
    }

    pub fn invalid_parameter(parameter: &str, expected: &str, actual: &str) -> Self {
        KeyManagerError::InvalidParameter {
            parameter: parameter.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    pub fn aead(operation: &str, cause: &str) -> Self {
        KeyManagerError::Aead {
            operation: operation.to_string(),
            cause: cause.to_string(),
        }
    }

    pub fn random_generation(cause: &str) -> Self {
        KeyManagerError::RandomGeneration {
            cause: cause.to_string(),
        }
    }
}

/// Result type alias for key-manager operations
pub type KeyManagerResult<T> = Result<T, KeyManagerError>;
