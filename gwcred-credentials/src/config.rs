//! Credential encryptor configuration.

use gwcred_crypto::{AeMac, RetryPolicy};
use serde::{Deserialize, Serialize};

/// Configuration for a [`CredentialEncryptor`](crate::CredentialEncryptor).
///
/// Bound at construction; an encryptor never changes its algorithms after
/// it is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncryptorConfig {
    /// MAC used by the hybrid path's authenticated encryption.
    pub mac: AeMac,

    /// Retry policy around each RSA-1024 segment encryption.
    pub segment_retry: RetryPolicy,
}

impl Default for EncryptorConfig {
    fn default() -> Self {
        Self {
            mac: AeMac::HmacSha256,
            segment_retry: RetryPolicy::default(), // 3 attempts, 50 ms apart
        }
    }
}
