//! Segmented RSA PKCS#1 v1.5 encryption for legacy 1024-bit gateway keys.
//!
//! The plaintext is cut into 85-byte segments; each segment is encrypted on
//! its own and occupies a fixed 128-byte slot in the output. The last
//! segment is encrypted at its true length, without zero padding. Slot
//! boundaries are implicit, so the decryptor walks the buffer in 128-byte
//! steps.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::rngs::OsRng;
use rsa::Pkcs1v15Encrypt;
use tracing::debug;

use crate::encryptor::PayloadEncryptor;
use crate::error::{CryptoError, CryptoResult};
use crate::retry::{RetryPolicy, Sleeper, ThreadSleeper};
use crate::rsa_key::public_key_from_components;

/// Plaintext bytes per RSA block.
pub const SEGMENT_LEN: usize = 85;

/// Ciphertext bytes per RSA block (1024-bit modulus).
pub const RSA_1024_BLOCK_LEN: usize = 128;

/// Number of segments a plaintext of `len` bytes is split into.
pub const fn segment_count(len: usize) -> usize {
    len.div_ceil(SEGMENT_LEN)
}

/// Raw (pre-base64) output length for a plaintext of `len` bytes.
pub const fn ciphertext_len(len: usize) -> usize {
    segment_count(len) * RSA_1024_BLOCK_LEN
}

/// Encrypts plaintexts for gateway members holding 1024-bit keys.
#[derive(Clone)]
pub struct SegmentedEncryptor {
    retry: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
}

impl SegmentedEncryptor {
    pub fn new(retry: RetryPolicy) -> Self {
        Self::with_sleeper(retry, Arc::new(ThreadSleeper))
    }

    /// Uses `sleeper` for the delay between retried attempts.
    pub fn with_sleeper(retry: RetryPolicy, sleeper: Arc<dyn Sleeper>) -> Self {
        Self { retry, sleeper }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Encrypts every segment and returns the concatenated blocks.
    pub fn encrypt_blocks(
        &self,
        plaintext: &[u8],
        modulus: &[u8],
        exponent: &[u8],
    ) -> CryptoResult<Vec<u8>> {
        let key = public_key_from_components(modulus, exponent)?;
        let segments = segment_count(plaintext.len());
        debug!(
            plaintext_len = plaintext.len(),
            segments, "encrypting with segmented RSA PKCS#1 v1.5"
        );

        let mut out = vec![0u8; segments * RSA_1024_BLOCK_LEN];
        for (index, (segment, slot)) in plaintext
            .chunks(SEGMENT_LEN)
            .zip(out.chunks_mut(RSA_1024_BLOCK_LEN))
            .enumerate()
        {
            let block = self
                .retry
                .run(self.sleeper.as_ref(), |_| {
                    key.encrypt(&mut OsRng, Pkcs1v15Encrypt, segment)
                })
                .map_err(|e| CryptoError::EncryptionFailed {
                    attempts: e.attempts,
                    reason: format!("segment {index}: {}", e.last_error),
                })?;

            if block.len() != RSA_1024_BLOCK_LEN {
                return Err(CryptoError::Encryption(format!(
                    "segment {index} produced {} bytes, expected {RSA_1024_BLOCK_LEN}",
                    block.len()
                )));
            }
            slot.copy_from_slice(&block);
        }

        Ok(out)
    }
}

impl Default for SegmentedEncryptor {
    fn default() -> Self {
        Self::new(RetryPolicy::default())
    }
}

impl std::fmt::Debug for SegmentedEncryptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentedEncryptor")
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl PayloadEncryptor for SegmentedEncryptor {
    fn encrypt(&self, plaintext: &[u8], modulus: &[u8], exponent: &[u8]) -> CryptoResult<String> {
        let blocks = self.encrypt_blocks(plaintext, modulus, exponent)?;
        Ok(STANDARD.encode(blocks))
    }
}
