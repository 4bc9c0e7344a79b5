//! Credential encryption error types.

use thiserror::Error;

/// Result type for credential operations.
pub type CredentialResult<T> = Result<T, CredentialError>;

/// Errors that can occur while building or encrypting credentials.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("{0} is required")]
    MissingRequiredField(&'static str),

    #[error("public key {0} is required")]
    MissingPublicKeyField(&'static str),

    #[error("public key {field} is not valid base64: {source}")]
    InvalidEncoding {
        field: &'static str,
        #[source]
        source: base64::DecodeError,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unsupported credential type: {0}")]
    UnsupportedCredentialType(String),

    #[error("crypto error: {0}")]
    Crypto(#[from] gwcred_crypto::CryptoError),
}
