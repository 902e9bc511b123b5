//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod identity;

pub use identity::{IdentityError, IdentityProvider};
