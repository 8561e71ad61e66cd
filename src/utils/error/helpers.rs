//! Helper functions for creating specific error types

use super::types::BookmsError;

/// Helper functions for creating specific errors
impl BookmsError {
    pub fn invalid_credentials<S: Into<String>>(message: S) -> Self {
        Self::InvalidCredentials(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn sso_failure<S: Into<String>>(message: S) -> Self {
        Self::SsoFailure(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the error was caused by the caller's input rather than the system
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials(_) | Self::Validation(_) | Self::SsoFailure(_)
        )
    }

    /// Human-readable message without the category prefix
    pub fn message(&self) -> String {
        match self {
            Self::InvalidCredentials(msg)
            | Self::Validation(msg)
            | Self::SsoFailure(msg)
            | Self::Config(msg)
            | Self::Storage(msg)
            | Self::Internal(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}
