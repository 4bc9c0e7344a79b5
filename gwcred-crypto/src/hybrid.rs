//! Hybrid RSA-OAEP + authenticated encryption for gateway keys other than
//! 1024-bit.
//!
//! One-time AES and HMAC keys seal the plaintext; the keys themselves are
//! wrapped with RSA-OAEP-SHA256. The two halves are base64-encoded and
//! concatenated with no separator:
//!
//! ```text
//! base64(oaep(key blob)) || base64(authenticated envelope)
//! ```
//!
//! The OAEP ciphertext is always exactly the modulus length, so the first
//! half is always [`oaep_base64_len`] characters long. The gateway splits on
//! that length; adding a delimiter would break it.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::RngCore;
use rand::rngs::OsRng;
use rsa::Oaep;
use sha2::Sha256;
use tracing::debug;
use zeroize::Zeroizing;

use crate::algorithm::AeAlgorithms;
use crate::authenticated::AuthenticatedEncryptor;
use crate::encryptor::PayloadEncryptor;
use crate::error::{CryptoError, CryptoResult};
use crate::rsa_key::public_key_from_components;

/// One-time AES-256 key length.
pub const AES_KEY_LEN: usize = 32;

/// One-time HMAC key length.
pub const HMAC_KEY_LEN: usize = 64;

/// Length tag announcing a 32-byte AES-256 key.
pub const AES_256_LEN_TAG: u8 = 0x00;

/// Length tag announcing a 64-byte HMAC-512 key.
pub const HMAC_512_LEN_TAG: u8 = 0x01;

/// Key blob length: two tags, the AES key, the HMAC key.
pub const KEY_BLOB_LEN: usize = 2 + AES_KEY_LEN + HMAC_KEY_LEN;

/// Length of the base64 OAEP half for a modulus of `modulus_len` bytes.
pub const fn oaep_base64_len(modulus_len: usize) -> usize {
    modulus_len.div_ceil(3) * 4
}

/// Builds `0x00 || 0x01 || aes_key || hmac_key`.
pub fn build_key_blob(
    aes_key: &[u8; AES_KEY_LEN],
    hmac_key: &[u8; HMAC_KEY_LEN],
) -> Zeroizing<[u8; KEY_BLOB_LEN]> {
    let mut blob = Zeroizing::new([0u8; KEY_BLOB_LEN]);
    blob[0] = AES_256_LEN_TAG;
    blob[1] = HMAC_512_LEN_TAG;
    blob[2..2 + AES_KEY_LEN].copy_from_slice(aes_key);
    blob[2 + AES_KEY_LEN..].copy_from_slice(hmac_key);
    blob
}

/// Encrypts plaintexts for gateway members holding non-1024-bit keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct HybridEncryptor {
    authenticated: AuthenticatedEncryptor,
}

impl HybridEncryptor {
    pub const fn new(algorithms: AeAlgorithms) -> Self {
        Self {
            authenticated: AuthenticatedEncryptor::new(algorithms),
        }
    }

    pub const fn algorithms(&self) -> AeAlgorithms {
        self.authenticated.algorithms()
    }

    /// Returns the raw `(oaep ciphertext, authenticated envelope)` pair.
    pub fn encrypt_parts(
        &self,
        plaintext: &[u8],
        modulus: &[u8],
        exponent: &[u8],
    ) -> CryptoResult<(Vec<u8>, Vec<u8>)> {
        let key = public_key_from_components(modulus, exponent)?;

        let mut aes_key = Zeroizing::new([0u8; AES_KEY_LEN]);
        let mut hmac_key = Zeroizing::new([0u8; HMAC_KEY_LEN]);
        OsRng
            .try_fill_bytes(&mut aes_key[..])
            .map_err(|e| CryptoError::Rng(e.to_string()))?;
        OsRng
            .try_fill_bytes(&mut hmac_key[..])
            .map_err(|e| CryptoError::Rng(e.to_string()))?;

        let envelope = self
            .authenticated
            .encrypt(&aes_key[..], &hmac_key[..], plaintext)?;

        let blob = build_key_blob(&aes_key, &hmac_key);
        let wrapped = key
            .encrypt(&mut OsRng, Oaep::new::<Sha256>(), &blob[..])
            .map_err(|e| CryptoError::Encryption(format!("rsa-oaep key wrap failed: {e}")))?;

        debug!(
            modulus_len = modulus.len(),
            wrapped_len = wrapped.len(),
            envelope_len = envelope.len(),
            "sealed payload with hybrid RSA-OAEP"
        );
        Ok((wrapped, envelope))
    }
}

impl PayloadEncryptor for HybridEncryptor {
    fn encrypt(&self, plaintext: &[u8], modulus: &[u8], exponent: &[u8]) -> CryptoResult<String> {
        let (wrapped, envelope) = self.encrypt_parts(plaintext, modulus, exponent)?;
        let mut out = STANDARD.encode(wrapped);
        STANDARD.encode_string(envelope, &mut out);
        Ok(out)
    }
}
