//! # Authgate Core
//!
//! The domain layer of the authentication gateway.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod ports;

pub use ports::{IdentityError, IdentityProvider};
