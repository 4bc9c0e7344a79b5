//! Authenticated encryption: AES-256-CBC + HMAC, encrypt-then-MAC.
//!
//! Envelope layout:
//!
//! ```text
//! algorithm ids (2) || tag || iv (16) || ciphertext
//! ```
//!
//! The tag is computed over `algorithm ids || iv || ciphertext`, in that
//! order. The gateway's decryptor recomputes it byte for byte, so neither the
//! layout nor the MAC input order may change.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockEncryptMut, KeyIvInit};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Sha256, Sha384, Sha512};

use crate::algorithm::{AES_KEY_SIZE, AeAlgorithms, AeCipher, AeMac, BLOCK_SIZE, MIN_KEY_SIZE};
use crate::error::{CryptoError, CryptoResult};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

/// Length of the algorithm-id header.
pub const ALGORITHM_IDS_SIZE: usize = 2;

/// Returns the PKCS#7-padded length of a plaintext of `len` bytes.
///
/// A full block of padding is added when `len` is already block-aligned.
pub const fn padded_len(len: usize) -> usize {
    (len / BLOCK_SIZE + 1) * BLOCK_SIZE
}

/// Authenticated encryptor bound to one cipher/MAC pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthenticatedEncryptor {
    algorithms: AeAlgorithms,
}

impl AuthenticatedEncryptor {
    pub const fn new(algorithms: AeAlgorithms) -> Self {
        Self { algorithms }
    }

    pub const fn algorithms(&self) -> AeAlgorithms {
        self.algorithms
    }

    /// Total envelope length for a plaintext of `plaintext_len` bytes.
    pub const fn envelope_len(&self, plaintext_len: usize) -> usize {
        ALGORITHM_IDS_SIZE + self.algorithms.mac.tag_len() + BLOCK_SIZE + padded_len(plaintext_len)
    }

    /// Encrypts `message` and returns the full envelope.
    ///
    /// Both keys must be at least 32 bytes; only the first 32 bytes of
    /// `key_enc` are used. A fresh IV is drawn from the OS RNG on every call.
    pub fn encrypt(&self, key_enc: &[u8], key_mac: &[u8], message: &[u8]) -> CryptoResult<Vec<u8>> {
        check_key_len("encryption key", key_enc)?;
        check_key_len("mac key", key_mac)?;

        let mut iv = [0u8; BLOCK_SIZE];
        OsRng
            .try_fill_bytes(&mut iv)
            .map_err(|e| CryptoError::Rng(e.to_string()))?;

        let ciphertext = self.encrypt_body(&key_enc[..AES_KEY_SIZE], &iv, message)?;

        let ids = self.algorithms.ids();
        let tag = self.compute_tag(key_mac, &[&ids, &iv, &ciphertext])?;

        let mut envelope = Vec::with_capacity(ids.len() + tag.len() + iv.len() + ciphertext.len());
        envelope.extend_from_slice(&ids);
        envelope.extend_from_slice(&tag);
        envelope.extend_from_slice(&iv);
        envelope.extend_from_slice(&ciphertext);
        Ok(envelope)
    }

    fn encrypt_body(&self, key: &[u8], iv: &[u8], message: &[u8]) -> CryptoResult<Vec<u8>> {
        match self.algorithms.cipher {
            AeCipher::Aes256CbcPkcs7 => {
                let cipher = Aes256CbcEnc::new_from_slices(key, iv)
                    .map_err(|e| CryptoError::Encryption(format!("aes-cbc init failed: {e}")))?;
                Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(message))
            }
        }
    }

    fn compute_tag(&self, key: &[u8], parts: &[&[u8]]) -> CryptoResult<Vec<u8>> {
        match self.algorithms.mac {
            AeMac::HmacSha256 => hmac_tag::<Hmac<Sha256>>(key, parts),
            AeMac::HmacSha384 => hmac_tag::<Hmac<Sha384>>(key, parts),
            AeMac::HmacSha512 => hmac_tag::<Hmac<Sha512>>(key, parts),
        }
    }
}

/// Encrypts with the default algorithms (AES-256-CBC-PKCS7, HMAC-SHA-256).
pub fn authenticated_encrypt(key_enc: &[u8], key_mac: &[u8], message: &[u8]) -> CryptoResult<Vec<u8>> {
    AuthenticatedEncryptor::default().encrypt(key_enc, key_mac, message)
}

fn check_key_len(name: &'static str, key: &[u8]) -> CryptoResult<()> {
    if key.len() < MIN_KEY_SIZE {
        return Err(CryptoError::InvalidKey {
            name,
            min: MIN_KEY_SIZE,
            actual: key.len(),
        });
    }
    Ok(())
}

fn hmac_tag<M: Mac + KeyInit>(key: &[u8], parts: &[&[u8]]) -> CryptoResult<Vec<u8>> {
    let mut mac = <M as KeyInit>::new_from_slice(key)
        .map_err(|e| CryptoError::Encryption(format!("hmac init failed: {e}")))?;
    for part in parts {
        mac.update(part);
    }
    Ok(mac.finalize().into_bytes().to_vec())
}
