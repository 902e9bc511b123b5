//! Stubbed identity provider for unit tests.

use async_trait::async_trait;

use authgate_core::domain::{Credentials, TokenSet, UserProfile};
use authgate_core::ports::{IdentityError, IdentityProvider};

/// What the stubbed provider should answer for every call.
pub enum StubOutcome {
    Grant,
    Rejected(u16),
    Transport,
}

pub struct StubProvider {
    pub outcome: StubOutcome,
}

impl StubProvider {
    fn tokens(&self) -> Result<TokenSet, IdentityError> {
        match self.outcome {
            StubOutcome::Grant => Ok(sample_tokens()),
            StubOutcome::Rejected(status) => Err(IdentityError::Rejected { status }),
            StubOutcome::Transport => Err(transport_error()),
        }
    }

    fn unit(&self) -> Result<(), IdentityError> {
        self.tokens().map(|_| ())
    }
}

#[async_trait]
impl IdentityProvider for StubProvider {
    async fn password_grant(&self, _credentials: &Credentials) -> Result<TokenSet, IdentityError> {
        self.tokens()
    }

    async fn refresh_grant(&self, _refresh_token: &str) -> Result<TokenSet, IdentityError> {
        self.tokens()
    }

    async fn revoke_token(&self, _token: &str) -> Result<(), IdentityError> {
        self.unit()
    }

    async fn end_session(&self, _id_token: &str) -> Result<(), IdentityError> {
        self.unit()
    }

    async fn user_profile(&self, _access_token: &str) -> Result<UserProfile, IdentityError> {
        self.tokens().map(|_| sample_profile())
    }
}

pub fn sample_tokens() -> TokenSet {
    TokenSet {
        token_type: "Bearer".to_string(),
        access_token: "AT1".to_string(),
        refresh_token: "RT1".to_string(),
        expires_in: 300,
        refresh_expires_in: 1800,
    }
}

pub fn sample_profile() -> UserProfile {
    UserProfile {
        id: "9d1c".to_string(),
        username: "jdoe".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: "jane@doe.dev".to_string(),
        email_verified: true,
    }
}

pub fn transport_error() -> IdentityError {
    IdentityError::Transport("connection refused (127.0.0.1:8443)".to_string())
}
