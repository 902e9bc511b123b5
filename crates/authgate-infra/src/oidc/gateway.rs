//! HTTP gateway to the OpenID-Connect identity provider.
//!
//! Each port method issues exactly one request against the configured
//! endpoints: a form-encoded POST for the token, revoke and logout calls,
//! a bearer-authorized GET for userinfo. There are no retries; failures
//! are classified for the caller and the details stay in the logs.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use authgate_core::domain::{Credentials, TokenSet, UserProfile};
use authgate_core::ports::{IdentityError, IdentityProvider};

use crate::oidc::config::OidcConfig;

/// OAuth2 grant types sent to the token and revoke endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantType {
    Password,
    RefreshToken,
    ClientCredentials,
}

impl GrantType {
    pub fn as_str(self) -> &'static str {
        match self {
            GrantType::Password => "password",
            GrantType::RefreshToken => "refresh_token",
            GrantType::ClientCredentials => "client_credentials",
        }
    }
}

/// Requested on the password grant so the provider issues an ID token.
const SCOPE_OPENID: &str = "openid";

/// `IdentityProvider` implementation backed by a pooled `reqwest` client.
pub struct OidcGateway {
    http: reqwest::Client,
    config: OidcConfig,
}

impl OidcGateway {
    /// Build a gateway with its own connection pool and request timeout.
    pub fn new(config: OidcConfig) -> Result<Self, IdentityError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| IdentityError::Transport(e.to_string()))?;

        Ok(Self { http, config })
    }

    async fn post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<reqwest::Response, IdentityError> {
        let response = self
            .http
            .post(self.config.url(path))
            .form(form)
            .send()
            .await
            .map_err(|e| IdentityError::Transport(e.to_string()))?;

        Self::reject_on_error_status(response).await
    }

    /// Non-2xx responses become `Rejected`; the body never leaves the log.
    async fn reject_on_error_status(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, IdentityError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!(
            status = status.as_u16(),
            body = %body,
            "identity provider rejected the request"
        );
        Err(IdentityError::Rejected {
            status: status.as_u16(),
        })
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, IdentityError> {
        response
            .json()
            .await
            .map_err(|e| IdentityError::Decode(e.to_string()))
    }
}

#[async_trait]
impl IdentityProvider for OidcGateway {
    async fn password_grant(&self, credentials: &Credentials) -> Result<TokenSet, IdentityError> {
        tracing::debug!(email = %credentials.email, "requesting tokens (password grant)");
        let form = [
            ("grant_type", GrantType::Password.as_str()),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("username", credentials.email.as_str()),
            ("password", credentials.password.as_str()),
            ("scope", SCOPE_OPENID),
        ];

        let response = self.post_form(&self.config.endpoints.token, &form).await?;
        Self::decode(response).await
    }

    async fn refresh_grant(&self, refresh_token: &str) -> Result<TokenSet, IdentityError> {
        tracing::debug!("requesting tokens (refresh grant)");
        let form = [
            ("grant_type", GrantType::RefreshToken.as_str()),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("refresh_token", refresh_token),
        ];

        let response = self.post_form(&self.config.endpoints.token, &form).await?;
        Self::decode(response).await
    }

    async fn revoke_token(&self, token: &str) -> Result<(), IdentityError> {
        tracing::debug!("requesting token revocation");
        let form = [
            ("grant_type", GrantType::ClientCredentials.as_str()),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("token", token),
        ];

        self.post_form(&self.config.endpoints.revoke, &form)
            .await
            .map(|_| ())
    }

    async fn end_session(&self, id_token: &str) -> Result<(), IdentityError> {
        tracing::debug!("requesting session logout");
        let form = [
            ("id_token", id_token),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
        ];

        self.post_form(&self.config.endpoints.logout, &form)
            .await
            .map(|_| ())
    }

    async fn user_profile(&self, access_token: &str) -> Result<UserProfile, IdentityError> {
        tracing::debug!("requesting userinfo");
        let response = self
            .http
            .get(self.config.url(&self.config.endpoints.userinfo))
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| IdentityError::Transport(e.to_string()))?;

        let response = Self::reject_on_error_status(response).await?;
        Self::decode(response).await
    }
}
