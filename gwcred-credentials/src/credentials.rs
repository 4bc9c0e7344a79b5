//! Credential model.
//!
//! Every credential kind normalizes into an ordered list of `{name, value}`
//! entries. The JSON encoding of that list is the exact plaintext sealed to
//! the gateway:
//!
//! ```json
//! {"credentialData":[{"name":"username","value":"…"},{"name":"password","value":"…"}]}
//! ```
//!
//! The kind travels beside the ciphertext in the request, not inside it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CredentialError, CredentialResult};

/// Credential kinds a gateway connection can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CredentialKind {
    Anonymous,
    OAuth2,
    Windows,
    Key,
    Basic,
}

impl CredentialKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anonymous => "Anonymous",
            Self::OAuth2 => "OAuth2",
            Self::Windows => "Windows",
            Self::Key => "Key",
            Self::Basic => "Basic",
        }
    }
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CredentialKind {
    type Err = CredentialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Anonymous" => Ok(Self::Anonymous),
            "OAuth2" => Ok(Self::OAuth2),
            "Windows" => Ok(Self::Windows),
            "Key" => Ok(Self::Key),
            "Basic" => Ok(Self::Basic),
            other => Err(CredentialError::UnsupportedCredentialType(other.to_string())),
        }
    }
}

/// Kind-specific credential input, one payload per kind.
///
/// Deserializes from an object tagged with `credentialType`, e.g.
/// `{"credentialType":"Basic","username":"…","password":"…"}`.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "credentialType")]
pub enum CredentialDetails {
    Anonymous,
    OAuth2 {
        #[serde(rename = "accessToken", default)]
        access_token: String,
    },
    Windows {
        #[serde(default)]
        username: String,
        #[serde(default)]
        password: String,
    },
    Key {
        #[serde(default)]
        key: String,
    },
    Basic {
        #[serde(default)]
        username: String,
        #[serde(default)]
        password: String,
    },
}

impl CredentialDetails {
    pub const fn kind(&self) -> CredentialKind {
        match self {
            Self::Anonymous => CredentialKind::Anonymous,
            Self::OAuth2 { .. } => CredentialKind::OAuth2,
            Self::Windows { .. } => CredentialKind::Windows,
            Self::Key { .. } => CredentialKind::Key,
            Self::Basic { .. } => CredentialKind::Basic,
        }
    }

    /// Parses tagged JSON, reporting an unknown `credentialType` as
    /// [`CredentialError::UnsupportedCredentialType`].
    pub fn from_json(json: &str) -> CredentialResult<Self> {
        #[derive(Deserialize)]
        struct Tag {
            #[serde(rename = "credentialType")]
            credential_type: String,
        }

        let tag: Tag = serde_json::from_str(json)?;
        tag.credential_type.parse::<CredentialKind>()?;
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Debug for CredentialDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialDetails")
            .field("kind", &self.kind())
            .finish_non_exhaustive()
    }
}

/// One `{name, value}` pair of the serialized credential.
#[derive(Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct CredentialEntry {
    #[zeroize(skip)]
    name: &'static str,
    value: String,
}

impl CredentialEntry {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for CredentialEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialEntry")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// A validated credential ready to be sealed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    #[serde(skip)]
    kind: CredentialKind,
    #[serde(rename = "credentialData")]
    entries: Vec<CredentialEntry>,
}

impl Credentials {
    pub fn anonymous() -> Self {
        Self {
            kind: CredentialKind::Anonymous,
            entries: Vec::new(),
        }
    }

    pub fn oauth2(access_token: impl Into<String>) -> CredentialResult<Self> {
        Self::from_details(CredentialDetails::OAuth2 {
            access_token: access_token.into(),
        })
    }

    pub fn windows(username: impl Into<String>, password: impl Into<String>) -> CredentialResult<Self> {
        Self::from_details(CredentialDetails::Windows {
            username: username.into(),
            password: password.into(),
        })
    }

    pub fn key(key: impl Into<String>) -> CredentialResult<Self> {
        Self::from_details(CredentialDetails::Key { key: key.into() })
    }

    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> CredentialResult<Self> {
        Self::from_details(CredentialDetails::Basic {
            username: username.into(),
            password: password.into(),
        })
    }

    /// Validates `details` and builds the ordered entry list.
    pub fn from_details(details: CredentialDetails) -> CredentialResult<Self> {
        let kind = details.kind();
        let entries = match details {
            CredentialDetails::Anonymous => Vec::new(),
            CredentialDetails::OAuth2 { access_token } => {
                vec![required("accessToken", access_token)?]
            }
            CredentialDetails::Windows { username, password }
            | CredentialDetails::Basic { username, password } => vec![
                required("username", username)?,
                required("password", password)?,
            ],
            CredentialDetails::Key { key } => vec![required("key", key)?],
        };
        Ok(Self { kind, entries })
    }

    pub fn kind(&self) -> CredentialKind {
        self.kind
    }

    pub fn entries(&self) -> &[CredentialEntry] {
        &self.entries
    }

    /// The JSON bytes that get encrypted.
    pub fn to_plaintext(&self) -> CredentialResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

fn required(name: &'static str, value: String) -> CredentialResult<CredentialEntry> {
    if value.is_empty() {
        return Err(CredentialError::MissingRequiredField(name));
    }
    Ok(CredentialEntry { name, value })
}
