//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use authgate_infra::oidc::DEFAULT_REQUEST_TIMEOUT;
use authgate_infra::{OidcConfig, OidcEndpoints};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub oidc: OidcConfig,
}

/// Raised at startup when a required provider setting is absent.
#[derive(Debug, thiserror::Error)]
#[error("missing required environment variable {0}")]
pub struct MissingSetting(&'static str);

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Provider settings are required; the endpoint paths default to the
    /// Keycloak realm layout and can be overridden individually.
    pub fn from_env() -> Result<Self, MissingSetting> {
        let realm = require("OIDC_REALM")?;

        let mut endpoints = OidcEndpoints::for_realm(&realm);
        if let Ok(path) = env::var("OIDC_TOKEN_PATH") {
            endpoints.token = path;
        }
        if let Ok(path) = env::var("OIDC_REVOKE_PATH") {
            endpoints.revoke = path;
        }
        if let Ok(path) = env::var("OIDC_LOGOUT_PATH") {
            endpoints.logout = path;
        }
        if let Ok(path) = env::var("OIDC_USERINFO_PATH") {
            endpoints.userinfo = path;
        }

        let oidc = OidcConfig {
            client_id: require("OIDC_CLIENT_ID")?,
            client_secret: require("OIDC_CLIENT_SECRET")?,
            base_url: require("OIDC_BASE_URL")?,
            realm,
            endpoints,
            request_timeout: env::var("OIDC_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            oidc,
        })
    }
}

fn require(key: &'static str) -> Result<String, MissingSetting> {
    env::var(key).map_err(|_| MissingSetting(key))
}
