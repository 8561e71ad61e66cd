//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.

use super::models::*;
use crate::utils::error::{BookmsError, Result};
use crate::utils::validation::{MIN_PASSWORD_LEN, is_route_path, is_valid_email};
use std::collections::HashSet;
use tracing::debug;

/// Trait for validating configuration
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        debug!("Validating application configuration");

        self.auth.validate()?;
        self.session.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<()> {
        debug!("Validating auth configuration");

        if !is_route_path(&self.sign_in_path) {
            return Err(BookmsError::Config(format!(
                "sign_in_path must be an absolute route, got: {}",
                self.sign_in_path
            )));
        }

        if !is_route_path(&self.forbidden_path) {
            return Err(BookmsError::Config(format!(
                "forbidden_path must be an absolute route, got: {}",
                self.forbidden_path
            )));
        }

        if self.sign_in_path == self.forbidden_path {
            return Err(BookmsError::Config(
                "sign_in_path and forbidden_path must differ".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for account in &self.demo_accounts {
            account.validate()?;
            if !seen.insert(account.email.to_lowercase()) {
                return Err(BookmsError::Config(format!(
                    "Duplicate demo account: {}",
                    account.email
                )));
            }
        }

        Ok(())
    }
}

impl Validate for DemoAccount {
    fn validate(&self) -> Result<()> {
        if !is_valid_email(&self.email) {
            return Err(BookmsError::Config(format!(
                "Demo account has invalid email: {}",
                self.email
            )));
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(BookmsError::Config(format!(
                "Demo account {} password must be at least {} characters",
                self.email, MIN_PASSWORD_LEN
            )));
        }

        if self.full_name.trim().is_empty() {
            return Err(BookmsError::Config(format!(
                "Demo account {} must have a full name",
                self.email
            )));
        }

        Ok(())
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<()> {
        debug!("Validating session configuration");

        if self.access_key.is_empty() || self.refresh_key.is_empty() {
            return Err(BookmsError::Config(
                "Session marker keys cannot be empty".to_string(),
            ));
        }

        if self.access_key == self.refresh_key {
            return Err(BookmsError::Config(
                "access_key and refresh_key must differ".to_string(),
            ));
        }

        if self.backend == SessionBackend::File && self.path.is_none() {
            return Err(BookmsError::Config(
                "File session backend requires a path".to_string(),
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<()> {
        if self.level.trim().is_empty() {
            return Err(BookmsError::Config("Log level cannot be empty".to_string()));
        }

        tracing_subscriber::EnvFilter::try_new(&self.level).map_err(|e| {
            BookmsError::Config(format!("Invalid log level '{}': {}", self.level, e))
        })?;

        Ok(())
    }
}
