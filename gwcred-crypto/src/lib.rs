//! Encryption primitives for sealing credentials to on-premises gateway
//! members.
//!
//! A gateway member publishes an RSA public key. Payloads are sealed to it
//! in one of two ways:
//!
//! 1. **Segmented RSA** ([`SegmentedEncryptor`]) for legacy 1024-bit keys:
//!    the plaintext is cut into 85-byte segments, each encrypted with
//!    RSA PKCS#1 v1.5 into a 128-byte block.
//!
//! 2. **Hybrid** ([`HybridEncryptor`]) for every other key size: one-time
//!    AES-256 and HMAC keys seal the plaintext with
//!    [`AuthenticatedEncryptor`] (AES-256-CBC + HMAC, encrypt-then-MAC),
//!    and the one-time keys are wrapped with RSA-OAEP-SHA256.
//!
//! Both implement [`PayloadEncryptor`]. The output formats are fixed by the
//! gateway's decryptor and must stay byte-compatible.
//!
//! Randomness comes only from the OS CSPRNG. Nothing here decrypts.

pub mod algorithm;
pub mod authenticated;
pub mod encryptor;
mod error;
pub mod hybrid;
pub mod retry;
mod rsa_key;
pub mod segmented;

pub use algorithm::{AeAlgorithms, AeCipher, AeMac, BLOCK_SIZE, MIN_KEY_SIZE};
pub use authenticated::{AuthenticatedEncryptor, authenticated_encrypt, padded_len};
pub use encryptor::PayloadEncryptor;
pub use error::{CryptoError, CryptoResult};
pub use hybrid::{HybridEncryptor, oaep_base64_len};
pub use retry::{RetryPolicy, Sleeper, ThreadSleeper};
pub use rsa_key::public_key_from_components;
pub use segmented::{RSA_1024_BLOCK_LEN, SEGMENT_LEN, SegmentedEncryptor, segment_count};
