//! Core identity types and enums

use super::role::UserRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Signed-in principal
///
/// At most one identity is live at a time; it is created on sign-in or
/// sign-up, replaced wholesale on the next sign-in and dropped on sign-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Unique identifier
    pub id: Uuid,
    /// Email address
    pub email: String,
    /// Display name
    pub full_name: String,
    /// User role
    pub role: UserRole,
    /// Where the identity was authenticated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<IdentityProvider>,
    /// Last login timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    /// Whether the account is active
    pub is_active: bool,
}

/// Origin of an identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityProvider {
    /// Native email/password credentials
    Email,
    /// Google sign-in
    Google,
    /// Microsoft sign-in
    Microsoft,
}

/// External identity source accepted for single sign-on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SsoProvider {
    Google,
    Microsoft,
}

impl SsoProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            SsoProvider::Google => "google",
            SsoProvider::Microsoft => "microsoft",
        }
    }
}

impl std::fmt::Display for SsoProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SsoProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google" => Ok(SsoProvider::Google),
            "microsoft" => Ok(SsoProvider::Microsoft),
            _ => Err(format!("Unsupported SSO provider: {}", s)),
        }
    }
}

impl From<SsoProvider> for IdentityProvider {
    fn from(provider: SsoProvider) -> Self {
        match provider {
            SsoProvider::Google => IdentityProvider::Google,
            SsoProvider::Microsoft => IdentityProvider::Microsoft,
        }
    }
}

impl Identity {
    /// Create a new active identity authenticated with email credentials
    pub fn new(email: impl Into<String>, full_name: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            full_name: full_name.into(),
            role,
            provider: Some(IdentityProvider::Email),
            last_login: None,
            is_active: true,
        }
    }

    /// Set the identity origin
    pub fn with_provider(mut self, provider: IdentityProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Check if identity is active
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Check if the identity's role is at least `role`
    pub fn has_role(&self, role: UserRole) -> bool {
        self.role.satisfies(role)
    }

    /// Update last login
    pub fn update_last_login(&mut self) {
        self.last_login = Some(chrono::Utc::now());
    }
}
