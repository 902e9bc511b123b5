//! Identity-provider connection settings.

use std::time::Duration;

/// Applied when no explicit outbound timeout is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how to reach the OpenID-Connect provider.
///
/// Supplied once at startup; the gateway holds a clone for the lifetime
/// of the process.
#[derive(Debug, Clone)]
pub struct OidcConfig {
    pub realm: String,
    pub client_id: String,
    pub client_secret: String,
    /// Scheme + authority, e.g. `https://id.example.com`.
    pub base_url: String,
    pub endpoints: OidcEndpoints,
    pub request_timeout: Duration,
}

/// Per-operation endpoint paths, relative to the base URL.
#[derive(Debug, Clone)]
pub struct OidcEndpoints {
    pub token: String,
    pub revoke: String,
    pub logout: String,
    pub userinfo: String,
}

impl OidcEndpoints {
    /// The standard Keycloak realm layout.
    pub fn for_realm(realm: &str) -> Self {
        let prefix = format!("/realms/{realm}/protocol/openid-connect");
        Self {
            token: format!("{prefix}/token"),
            revoke: format!("{prefix}/revoke"),
            logout: format!("{prefix}/logout"),
            userinfo: format!("{prefix}/userinfo"),
        }
    }
}

impl OidcConfig {
    /// Absolute URL for an endpoint path.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_realm_endpoint_layout() {
        let endpoints = OidcEndpoints::for_realm("master");

        assert_eq!(endpoints.token, "/realms/master/protocol/openid-connect/token");
        assert_eq!(endpoints.revoke, "/realms/master/protocol/openid-connect/revoke");
        assert_eq!(endpoints.logout, "/realms/master/protocol/openid-connect/logout");
        assert_eq!(
            endpoints.userinfo,
            "/realms/master/protocol/openid-connect/userinfo"
        );
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let config = OidcConfig {
            realm: "master".to_string(),
            client_id: "web".to_string(),
            client_secret: "secret".to_string(),
            base_url: "https://id.example.com/".to_string(),
            endpoints: OidcEndpoints::for_realm("master"),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        };

        assert_eq!(
            config.url(&config.endpoints.token),
            "https://id.example.com/realms/master/protocol/openid-connect/token"
        );
    }
}
