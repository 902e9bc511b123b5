//! OpenID-Connect identity-provider integration.

mod config;
mod gateway;

pub use config::{DEFAULT_REQUEST_TIMEOUT, OidcConfig, OidcEndpoints};
pub use gateway::{GrantType, OidcGateway};
