//! Per-member fan-out for on-premises gateway clusters.
//!
//! Every member of a cluster holds its own key pair, so a connection's
//! credentials are sealed once per member.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::credentials::Credentials;
use crate::encryptor::CredentialEncryptor;
use crate::error::CredentialResult;
use crate::public_key::PublicKey;

/// A gateway cluster member and its published key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnPremisesGatewayMember {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub public_key: PublicKey,
}

/// Credentials sealed for one member, in request shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnPremisesCredentialEntry {
    pub gateway_id: String,
    pub encrypted_credentials: String,
}

impl CredentialEncryptor {
    /// Seals `credentials` to each member, in member order.
    ///
    /// Stops at the first member whose key fails; no partial list is
    /// returned.
    pub fn encrypt_for_members(
        &self,
        credentials: &Credentials,
        members: &[OnPremisesGatewayMember],
    ) -> CredentialResult<Vec<OnPremisesCredentialEntry>> {
        debug!(members = members.len(), kind = %credentials.kind(), "Encrypting for gateway members");

        let mut entries = Vec::with_capacity(members.len());
        for member in members {
            debug!(gateway_id = %member.id, "Encrypting for member");
            entries.push(OnPremisesCredentialEntry {
                gateway_id: member.id.clone(),
                encrypted_credentials: self.encrypt_credentials(credentials, &member.public_key)?,
            });
        }
        Ok(entries)
    }
}
