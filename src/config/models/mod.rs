//! Configuration data models
//!
//! This module defines all configuration structures used throughout the crate.

#![allow(missing_docs)]

pub mod app;
pub mod auth;
pub mod logging;
pub mod session;

// Re-export all configuration types
pub use app::*;
pub use auth::*;
pub use logging::*;
pub use session::*;

/// Default sign-in route
pub fn default_sign_in_path() -> String {
    "/auth".to_string()
}

/// Default forbidden route
pub fn default_forbidden_path() -> String {
    "/403".to_string()
}

/// Default storage key of the access marker
pub fn default_access_key() -> String {
    "access_token".to_string()
}

/// Default storage key of the refresh marker
pub fn default_refresh_key() -> String {
    "refresh_token".to_string()
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}

/// Default true value
pub fn default_true() -> bool {
    true
}
