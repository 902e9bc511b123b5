//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to log a user in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request to exchange a refresh token for a fresh token set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Request to end the provider session for a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutRequest {
    pub id_token: String,
}

/// Request to revoke a single token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevokeRequest {
    pub token: String,
}

/// Outcome of a logout request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub logged_out: bool,
}

/// Outcome of a revocation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevokeResponse {
    pub revoked: bool,
}
