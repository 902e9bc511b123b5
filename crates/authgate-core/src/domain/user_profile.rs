use serde::{Deserialize, Serialize};

/// User information held by the identity provider.
///
/// Deserialized from the OpenID-Connect userinfo claims and serialized to
/// API clients under this service's own field names. Claims the provider
/// does not populate fall back to their defaults; unknown claims are
/// ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename(deserialize = "sub"))]
    pub id: String,
    #[serde(rename(deserialize = "preferred_username"), default)]
    pub username: String,
    #[serde(rename(deserialize = "given_name"), default)]
    pub first_name: String,
    #[serde(rename(deserialize = "family_name"), default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
}
