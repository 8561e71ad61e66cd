//! Top-level application configuration

use super::*;
use crate::utils::error::{BookmsError, Result};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Session marker storage configuration
    #[serde(default)]
    pub session: SessionConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Build configuration from `BOOKMS_*` environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("BOOKMS_SIGN_IN_PATH") {
            config.auth.sign_in_path = path;
        }
        if let Ok(path) = std::env::var("BOOKMS_FORBIDDEN_PATH") {
            config.auth.forbidden_path = path;
        }
        if let Ok(backend) = std::env::var("BOOKMS_SESSION_BACKEND") {
            config.session.backend = backend
                .parse()
                .map_err(|e: String| BookmsError::config(e))?;
        }
        if let Ok(path) = std::env::var("BOOKMS_SESSION_FILE") {
            config.session.path = Some(path.into());
        }
        if let Ok(level) = std::env::var("BOOKMS_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Ok(json) = std::env::var("BOOKMS_LOG_JSON") {
            config.logging.json = matches!(json.to_lowercase().as_str(), "1" | "true" | "yes");
        }

        Ok(config)
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.auth = self.auth.merge(other.auth);
        self.session = self.session.merge(other.session);
        self.logging = self.logging.merge(other.logging);
        self
    }
}
