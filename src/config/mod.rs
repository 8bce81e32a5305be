//! Configuration loaded from environment variables.
//!
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`auth`]: cookie names for the session-token transport

pub mod auth;
pub mod database;

pub use auth::AuthCookieConfig;
