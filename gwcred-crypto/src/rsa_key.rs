//! Recipient RSA public keys built from raw big-endian components.

use rsa::{BigUint, RsaPublicKey};

use crate::error::{CryptoError, CryptoResult};

/// Floor for the modulus size bound; the key's own size raises it.
const MIN_MAX_MODULUS_BITS: usize = 4096;

/// Builds an RSA public key from big-endian modulus and exponent bytes.
///
/// Gateways may publish keys above 4096 bits, so the size bound follows the
/// modulus instead of the `rsa` crate default.
pub fn public_key_from_components(modulus: &[u8], exponent: &[u8]) -> CryptoResult<RsaPublicKey> {
    if modulus.is_empty() {
        return Err(CryptoError::InvalidPublicKey("modulus is empty".to_string()));
    }
    if exponent.is_empty() {
        return Err(CryptoError::InvalidPublicKey("exponent is empty".to_string()));
    }

    let n = BigUint::from_bytes_be(modulus);
    let e = BigUint::from_bytes_be(exponent);
    let max_bits = (modulus.len() * 8).max(MIN_MAX_MODULUS_BITS);
    RsaPublicKey::new_with_max_size(n, e, max_bits)
        .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))
}
