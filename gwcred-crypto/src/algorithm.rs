//! Algorithm identifiers for the authenticated-encryption envelope.
//!
//! The ids are written into the first two bytes of every envelope and are
//! covered by the MAC, so their numeric values are part of the wire format.

use serde::{Deserialize, Serialize};

use crate::error::{CryptoError, CryptoResult};

/// AES block size in bytes; also the IV length.
pub const BLOCK_SIZE: usize = 16;

/// Length of the AES-256 key.
pub const AES_KEY_SIZE: usize = 32;

/// Minimum accepted length for either authenticated-encryption key.
pub const MIN_KEY_SIZE: usize = 32;

/// Symmetric cipher used for the envelope body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AeCipher {
    /// AES-256 in CBC mode with PKCS#7 padding.
    #[default]
    Aes256CbcPkcs7,
}

impl AeCipher {
    pub const fn id(self) -> u8 {
        match self {
            Self::Aes256CbcPkcs7 => 0,
        }
    }

    pub fn from_id(id: u8) -> CryptoResult<Self> {
        match id {
            0 => Ok(Self::Aes256CbcPkcs7),
            other => Err(CryptoError::UnsupportedAlgorithm(other)),
        }
    }
}

/// MAC computed over `algorithm ids || iv || ciphertext`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AeMac {
    #[default]
    HmacSha256,
    HmacSha384,
    HmacSha512,
}

impl AeMac {
    pub const fn id(self) -> u8 {
        match self {
            Self::HmacSha256 => 0,
            Self::HmacSha384 => 1,
            Self::HmacSha512 => 2,
        }
    }

    pub fn from_id(id: u8) -> CryptoResult<Self> {
        match id {
            0 => Ok(Self::HmacSha256),
            1 => Ok(Self::HmacSha384),
            2 => Ok(Self::HmacSha512),
            other => Err(CryptoError::UnsupportedAlgorithm(other)),
        }
    }

    /// Tag length in bytes.
    pub const fn tag_len(self) -> usize {
        match self {
            Self::HmacSha256 => 32,
            Self::HmacSha384 => 48,
            Self::HmacSha512 => 64,
        }
    }
}

/// The cipher/MAC pair bound to an [`AuthenticatedEncryptor`](crate::AuthenticatedEncryptor).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AeAlgorithms {
    pub cipher: AeCipher,
    pub mac: AeMac,
}

impl AeAlgorithms {
    pub const fn new(cipher: AeCipher, mac: AeMac) -> Self {
        Self { cipher, mac }
    }

    /// The two-byte header `[cipher id, mac id]`.
    pub const fn ids(self) -> [u8; 2] {
        [self.cipher.id(), self.mac.id()]
    }

    /// Parses a two-byte header back into algorithm choices.
    pub fn from_ids(ids: [u8; 2]) -> CryptoResult<Self> {
        Ok(Self {
            cipher: AeCipher::from_id(ids[0])?,
            mac: AeMac::from_id(ids[1])?,
        })
    }
}
