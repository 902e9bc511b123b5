//! Authentication flows delegating to the identity provider.
//!
//! Every operation calls the provider port exactly once and folds the
//! outcome into the uniform response envelope; the boolean operations
//! collapse all failures to `false`. Provider failure detail goes to the
//! logs and never to the caller.

use std::sync::Arc;

use authgate_core::domain::{Credentials, TokenSet, UserProfile};
use authgate_core::ports::{IdentityError, IdentityProvider};
use authgate_shared::{Envelope, OperationError};

/// Orchestrates the auth operations exposed by the HTTP API.
#[derive(Clone)]
pub struct AuthService {
    provider: Arc<dyn IdentityProvider>,
}

impl AuthService {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    /// Exchange user credentials for a token set.
    pub async fn login(&self, credentials: Credentials) -> Envelope<TokenSet> {
        tracing::info!(email = %credentials.email, "Attempting to log in user");
        match self.provider.password_grant(&credentials).await {
            Ok(tokens) => {
                tracing::info!(email = %credentials.email, "User logged in");
                Envelope::ok(tokens)
            }
            Err(e) => Envelope::err(operation_error("login", &e)),
        }
    }

    /// Exchange a refresh token for a fresh token set.
    pub async fn refresh(&self, refresh_token: &str) -> Envelope<TokenSet> {
        tracing::info!("Attempting to refresh a token set");
        match self.provider.refresh_grant(refresh_token).await {
            Ok(tokens) => {
                tracing::info!("Token set refreshed");
                Envelope::ok(tokens)
            }
            Err(e) => Envelope::err(operation_error("refresh", &e)),
        }
    }

    /// Fetch the profile behind an access token.
    pub async fn profile(&self, access_token: &str) -> Envelope<UserProfile> {
        tracing::info!("Fetching user profile");
        match self.provider.user_profile(access_token).await {
            Ok(profile) => {
                tracing::info!(user = %profile.username, "User profile fetched");
                Envelope::ok(profile)
            }
            Err(e) => Envelope::err(operation_error("profile", &e)),
        }
    }

    /// End the provider session. `true` only when the provider confirmed.
    pub async fn logout(&self, id_token: &str) -> bool {
        tracing::info!("Attempting to log out user");
        match self.provider.end_session(id_token).await {
            Ok(()) => {
                tracing::info!("User logged out");
                true
            }
            Err(e) => {
                log_failure("logout", &e);
                false
            }
        }
    }

    /// Revoke a single token. `true` only when the provider confirmed.
    pub async fn revoke(&self, token: &str) -> bool {
        tracing::info!("Attempting to revoke a token");
        match self.provider.revoke_token(token).await {
            Ok(()) => {
                tracing::info!("Token revoked");
                true
            }
            Err(e) => {
                log_failure("revoke", &e);
                false
            }
        }
    }
}

/// Fold a provider failure into the caller-facing error.
///
/// Upstream rejections keep their status code and a message naming the
/// operation; everything else becomes a generic 500.
fn operation_error(operation: &'static str, error: &IdentityError) -> OperationError {
    log_failure(operation, error);
    match error {
        IdentityError::Rejected { status } => OperationError::new(
            *status,
            format!("identity provider rejected the {operation} request"),
        ),
        IdentityError::Transport(_) | IdentityError::Decode(_) => {
            OperationError::new(500, "authentication service failed to process the request")
        }
    }
}

fn log_failure(operation: &str, error: &IdentityError) {
    tracing::error!(operation, error = %error, "Identity provider call failed");
}
