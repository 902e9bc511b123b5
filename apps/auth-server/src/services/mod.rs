//! Business services sitting between the HTTP handlers and the ports.

mod auth;

pub use auth::AuthService;
