//! Gateway RSA public key as published by the service.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::{CredentialError, CredentialResult};

/// Base64 encoded RSA public key components.
///
/// Either field may be absent in what the service returns; absence and the
/// empty string are both reported as [`CredentialError::MissingPublicKeyField`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modulus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exponent: Option<String>,
}

/// Big-endian key components after base64 decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedPublicKey {
    pub modulus: Vec<u8>,
    pub exponent: Vec<u8>,
}

impl PublicKey {
    pub fn new(modulus: impl Into<String>, exponent: impl Into<String>) -> Self {
        Self {
            modulus: Some(modulus.into()),
            exponent: Some(exponent.into()),
        }
    }

    /// Checks presence of both fields, modulus first, then decodes them.
    pub fn decode(&self) -> CredentialResult<DecodedPublicKey> {
        let modulus = present("modulus", self.modulus.as_deref())?;
        let exponent = present("exponent", self.exponent.as_deref())?;
        Ok(DecodedPublicKey {
            modulus: decode_field("modulus", modulus)?,
            exponent: decode_field("exponent", exponent)?,
        })
    }
}

fn present<'a>(field: &'static str, value: Option<&'a str>) -> CredentialResult<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CredentialError::MissingPublicKeyField(field)),
    }
}

fn decode_field(field: &'static str, value: &str) -> CredentialResult<Vec<u8>> {
    STANDARD
        .decode(value)
        .map_err(|source| CredentialError::InvalidEncoding { field, source })
}
