//! # API Shared
//!
//! Shared utilities and definitions for the MMS API.
//!
//! Contains:
//! - Request/response types used on the wire (`types` module)
//! - Shared services like `HealthService`
//! - The login placeholder and in-memory session store
//!
//! Used by `api-rest` and the `mms-run` binary for common functionality.

pub mod auth;
pub mod health;
pub mod types;

pub use auth::{validate_password, AuthError, SessionStore};
pub use health::HealthService;
pub use types::*;
