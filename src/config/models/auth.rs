//! Authentication configuration

use super::*;
use crate::core::models::UserRole;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Route unauthenticated visitors are sent to
    #[serde(default = "default_sign_in_path")]
    pub sign_in_path: String,
    /// Route visitors lacking the required role are sent to
    #[serde(default = "default_forbidden_path")]
    pub forbidden_path: String,
    /// Accounts accepted by the demo backend
    #[serde(default = "default_demo_accounts")]
    pub demo_accounts: Vec<DemoAccount>,
}

/// Account accepted by the demo backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoAccount {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub full_name: String,
    pub role: UserRole,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            sign_in_path: default_sign_in_path(),
            forbidden_path: default_forbidden_path(),
            demo_accounts: default_demo_accounts(),
        }
    }
}

impl AuthConfig {
    /// Merge auth configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.sign_in_path != default_sign_in_path() {
            self.sign_in_path = other.sign_in_path;
        }
        if other.forbidden_path != default_forbidden_path() {
            self.forbidden_path = other.forbidden_path;
        }
        for account in other.demo_accounts {
            match self
                .demo_accounts
                .iter_mut()
                .find(|existing| existing.email.eq_ignore_ascii_case(&account.email))
            {
                Some(existing) => *existing = account,
                None => self.demo_accounts.push(account),
            }
        }
        self
    }
}

/// The built-in administrator account of the demo dashboard
pub fn default_demo_accounts() -> Vec<DemoAccount> {
    vec![DemoAccount {
        email: "admin@bookms.com".to_string(),
        password: "password123".to_string(),
        full_name: "Admin User".to_string(),
        role: UserRole::Admin,
        active: true,
    }]
}

/// Warn about configurations that are fine for a demo but not beyond it
pub fn warn_insecure_config(config: &AuthConfig) {
    for account in &config.demo_accounts {
        if account.password == "password123" {
            warn!(
                "Demo account {} uses the well-known default password",
                account.email
            );
        }
    }
}
