//! Credential encryption for on-premises data gateways.
//!
//! Builds the JSON credential payload for a connection and seals it to a
//! gateway member's RSA public key:
//! - [`Credentials`]: validated credential model, one constructor per kind
//! - [`PublicKey`]: base64 modulus and exponent as published by the service
//! - [`CredentialEncryptor`]: selects the wire format from the key size
//! - [`OnPremisesGatewayMember`]: fan-out across a gateway cluster

pub mod config;
pub mod credentials;
pub mod encryptor;
pub mod error;
pub mod gateway;
pub mod public_key;

pub use config::EncryptorConfig;
pub use credentials::{CredentialDetails, CredentialEntry, CredentialKind, Credentials};
pub use encryptor::{
    CredentialEncryptor, EncryptionPath, LEGACY_MODULUS_LEN, encrypt_credentials,
};
pub use error::{CredentialError, CredentialResult};
pub use gateway::{OnPremisesCredentialEntry, OnPremisesGatewayMember};
pub use public_key::{DecodedPublicKey, PublicKey};
