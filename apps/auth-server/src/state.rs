//! Application state - shared across all handlers.

use std::sync::Arc;

use authgate_core::ports::{IdentityError, IdentityProvider};
use authgate_infra::OidcGateway;

use crate::config::AppConfig;
use crate::services::AuthService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
}

impl AppState {
    /// Wire the OIDC gateway into the auth service.
    pub fn new(config: &AppConfig) -> Result<Self, IdentityError> {
        let provider: Arc<dyn IdentityProvider> =
            Arc::new(OidcGateway::new(config.oidc.clone())?);

        tracing::info!(realm = %config.oidc.realm, "Application state initialized");

        Ok(Self {
            auth: AuthService::new(provider),
        })
    }
}
