//! # Authgate Infrastructure
//!
//! Concrete implementations of the ports defined in `authgate-core`.
//! This crate holds the HTTP gateway to the external identity provider.

pub mod oidc;

pub use oidc::{OidcConfig, OidcEndpoints, OidcGateway};
