//! Crypto error types.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur while sealing a payload.
///
/// Messages never carry key material or plaintext.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("{name} must be at least {min} bytes, got {actual}")]
    InvalidKey {
        name: &'static str,
        min: usize,
        actual: usize,
    },

    #[error("invalid RSA public key: {0}")]
    InvalidPublicKey(String),

    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("encryption failed after {attempts} attempt(s): {reason}")]
    EncryptionFailed { attempts: u32, reason: String },

    #[error("random number generator failure: {0}")]
    Rng(String),

    #[error("unsupported algorithm id: {0}")]
    UnsupportedAlgorithm(u8),
}
