//! Credential encryption entry point.
//!
//! Picks the wire format from the gateway key size:
//! - 1024-bit modulus (128 bytes): segmented RSA PKCS#1 v1.5, for gateways
//!   that only understand the legacy format
//! - anything else: hybrid RSA-OAEP key wrap plus authenticated encryption

use std::fmt;
use std::sync::Arc;

use gwcred_crypto::{
    AeAlgorithms, AeCipher, HybridEncryptor, PayloadEncryptor, RSA_1024_BLOCK_LEN,
    SegmentedEncryptor,
};
use tracing::debug;
use zeroize::Zeroizing;

use crate::config::EncryptorConfig;
use crate::credentials::Credentials;
use crate::error::CredentialResult;
use crate::public_key::PublicKey;

/// Modulus length, in bytes, that selects the segmented format.
pub const LEGACY_MODULUS_LEN: usize = RSA_1024_BLOCK_LEN;

/// The wire format a payload is produced in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncryptionPath {
    Segmented,
    Hybrid,
}

impl EncryptionPath {
    pub const fn for_modulus_len(len: usize) -> Self {
        if len == LEGACY_MODULUS_LEN {
            Self::Segmented
        } else {
            Self::Hybrid
        }
    }
}

/// Serializes credentials and seals them to a gateway public key.
#[derive(Clone)]
pub struct CredentialEncryptor {
    segmented: Arc<dyn PayloadEncryptor>,
    hybrid: Arc<dyn PayloadEncryptor>,
}

impl CredentialEncryptor {
    pub fn new(config: &EncryptorConfig) -> Self {
        let algorithms = AeAlgorithms::new(AeCipher::Aes256CbcPkcs7, config.mac);
        Self::with_strategies(
            Arc::new(SegmentedEncryptor::new(config.segment_retry)),
            Arc::new(HybridEncryptor::new(algorithms)),
        )
    }

    /// Builds an encryptor over caller-supplied strategies.
    pub fn with_strategies(
        segmented: Arc<dyn PayloadEncryptor>,
        hybrid: Arc<dyn PayloadEncryptor>,
    ) -> Self {
        Self { segmented, hybrid }
    }

    /// Encrypts `credentials` for the holder of `public_key`.
    ///
    /// Key fields are validated and decoded before anything is serialized.
    /// The JSON plaintext is wiped once the strategy returns.
    pub fn encrypt_credentials(
        &self,
        credentials: &Credentials,
        public_key: &PublicKey,
    ) -> CredentialResult<String> {
        let key = public_key.decode()?;
        let plaintext = Zeroizing::new(credentials.to_plaintext()?);

        let path = EncryptionPath::for_modulus_len(key.modulus.len());
        debug!(
            kind = %credentials.kind(),
            modulus_len = key.modulus.len(),
            plaintext_len = plaintext.len(),
            ?path,
            "Encrypting credentials"
        );

        let strategy = match path {
            EncryptionPath::Segmented => &self.segmented,
            EncryptionPath::Hybrid => &self.hybrid,
        };
        Ok(strategy.encrypt(&plaintext, &key.modulus, &key.exponent)?)
    }
}

impl Default for CredentialEncryptor {
    fn default() -> Self {
        Self::new(&EncryptorConfig::default())
    }
}

impl fmt::Debug for CredentialEncryptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialEncryptor").finish_non_exhaustive()
    }
}

/// Encrypts with the default configuration.
pub fn encrypt_credentials(
    credentials: &Credentials,
    public_key: &PublicKey,
) -> CredentialResult<String> {
    CredentialEncryptor::default().encrypt_credentials(credentials, public_key)
}
