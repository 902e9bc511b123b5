//! Identity-provider port.

use async_trait::async_trait;

use crate::domain::{Credentials, TokenSet, UserProfile};

/// Gateway to the external OpenID-Connect identity provider.
///
/// Every method performs exactly one upstream interaction. There is no
/// local state, no caching and no retry at this seam; callers decide how
/// to present a failure.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchange user credentials for a token set (password grant).
    async fn password_grant(&self, credentials: &Credentials) -> Result<TokenSet, IdentityError>;

    /// Exchange a refresh token for a fresh token set.
    async fn refresh_grant(&self, refresh_token: &str) -> Result<TokenSet, IdentityError>;

    /// Ask the provider to revoke the given token.
    async fn revoke_token(&self, token: &str) -> Result<(), IdentityError>;

    /// End the provider session identified by the given ID token.
    async fn end_session(&self, id_token: &str) -> Result<(), IdentityError>;

    /// Fetch the profile of the user the access token belongs to.
    async fn user_profile(&self, access_token: &str) -> Result<UserProfile, IdentityError>;
}

/// Failures surfaced by an identity-provider gateway.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The provider answered with a non-2xx status. Carries only the
    /// status code; upstream response bodies stay out of the error value.
    #[error("identity provider rejected the request with status {status}")]
    Rejected { status: u16 },

    /// The request never produced a usable response.
    #[error("identity provider unreachable: {0}")]
    Transport(String),

    /// The provider answered 2xx with a body that could not be decoded.
    #[error("malformed identity provider response: {0}")]
    Decode(String),
}
