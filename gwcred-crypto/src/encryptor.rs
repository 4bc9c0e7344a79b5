//! Strategy interface for sealing a plaintext to an RSA public key.
//!
//! The credential orchestrator holds one strategy per key class and picks
//! between them by modulus length; it never sees the keys or ciphertext
//! layout the strategies produce.

use crate::error::CryptoResult;

/// Seals `plaintext` to the RSA key given by big-endian `modulus`/`exponent`
/// and returns the encoded ciphertext string.
pub trait PayloadEncryptor: Send + Sync {
    fn encrypt(&self, plaintext: &[u8], modulus: &[u8], exponent: &[u8]) -> CryptoResult<String>;
}
