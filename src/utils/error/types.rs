//! Error types for the access-control core

use thiserror::Error;

/// Result type alias for the access-control core
pub type Result<T> = std::result::Result<T, BookmsError>;

/// Main error type for the access-control core
///
/// Access denial is deliberately absent: a denied navigation is a routing
/// outcome (see [`crate::routing::GuardState`]), not a failure.
#[derive(Error, Debug)]
pub enum BookmsError {
    /// Wrong email/password pair
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Malformed or duplicate registration/sign-in input
    #[error("Validation error: {0}")]
    Validation(String),

    /// External identity exchange failed
    #[error("SSO failure: {0}")]
    SsoFailure(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session marker storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
