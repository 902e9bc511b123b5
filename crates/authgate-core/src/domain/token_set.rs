use serde::{Deserialize, Serialize};

/// The token bundle issued by the identity provider's token endpoint.
///
/// Every field is copied verbatim from the provider response; nothing is
/// parsed or validated locally. Unknown response fields are ignored, and
/// the refresh fields default to empty/zero when the provider omits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSet {
    pub token_type: String,
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    pub expires_in: u64,
    #[serde(default)]
    pub refresh_expires_in: u64,
}
