//! Auth backend request/response types

use crate::core::models::{Identity, UserRole};
use serde::{Deserialize, Serialize};

/// Opaque markers issued with a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTokens {
    /// Access marker; its presence gates automatic restoration
    pub access_token: String,
    /// Optional refresh marker
    pub refresh_token: Option<String>,
}

impl SessionTokens {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
        }
    }

    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }
}

/// Successful sign-in, sign-up or SSO exchange
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub identity: Identity,
    pub tokens: SessionTokens,
}

/// Sign-up form data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
    /// Requested role; `User` when absent
    #[serde(default)]
    pub role: Option<UserRole>,
    pub agree_to_terms: bool,
}

impl RegisterData {
    /// Registration with a confirmed password and accepted terms
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let password = password.into();
        Self {
            full_name: full_name.into(),
            email: email.into(),
            confirm_password: password.clone(),
            password,
            role: None,
            agree_to_terms: true,
        }
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }
}
