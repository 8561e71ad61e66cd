//! Route guard state machine

use crate::auth::rbac::AccessRequirement;
use crate::auth::session::SessionSnapshot;
use crate::config::AuthConfig;
use serde::Serialize;
use tracing::debug;

/// Outcome of guarding a protected route for one render pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GuardState {
    /// Session still loading; neither granted nor denied yet
    Pending,
    /// Render the protected content
    Granted,
    /// Redirect elsewhere
    Denied(Denial),
}

/// Why and where a navigation was turned away
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Denial {
    pub reason: DenialReason,
    pub redirect: Redirect,
}

/// Reason for a denial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// No identity; go sign in
    Unauthenticated,
    /// Identity present but its role does not meet the requirement
    RoleMismatch,
}

/// Redirect instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    /// Destination path
    pub to: String,
    /// Originally requested path, kept so navigation can resume after sign-in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl Redirect {
    pub fn to(path: impl Into<String>) -> Self {
        Self {
            to: path.into(),
            from: None,
        }
    }

    pub fn resuming(mut self, path: impl Into<String>) -> Self {
        self.from = Some(path.into());
        self
    }
}

impl GuardState {
    pub fn is_granted(&self) -> bool {
        matches!(self, GuardState::Granted)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, GuardState::Pending)
    }

    /// Denial details, if denied
    pub fn denial(&self) -> Option<&Denial> {
        match self {
            GuardState::Denied(denial) => Some(denial),
            _ => None,
        }
    }
}

/// Guard for protected routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuard {
    sign_in_path: String,
    forbidden_path: String,
}

impl RouteGuard {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            sign_in_path: config.sign_in_path.clone(),
            forbidden_path: config.forbidden_path.clone(),
        }
    }

    /// Same guard sending unauthenticated visitors to `path` instead
    pub fn with_sign_in_path(mut self, path: impl Into<String>) -> Self {
        self.sign_in_path = path.into();
        self
    }

    pub fn sign_in_path(&self) -> &str {
        &self.sign_in_path
    }

    /// Evaluate access to `requested` guarded by `requirement`
    ///
    /// `None` and an empty requirement both mean "any authenticated identity".
    pub fn evaluate(
        &self,
        session: &SessionSnapshot,
        requirement: Option<&AccessRequirement>,
        requested: &str,
    ) -> GuardState {
        if session.loading {
            return GuardState::Pending;
        }

        let Some(identity) = session.identity.as_ref() else {
            debug!("Denying {}: not signed in", requested);
            return GuardState::Denied(Denial {
                reason: DenialReason::Unauthenticated,
                redirect: Redirect::to(&self.sign_in_path).resuming(requested),
            });
        };

        match requirement {
            Some(requirement) if !session.can_access(requirement) => {
                debug!(
                    "Denying {} to {}: role {} does not meet {}",
                    requested, identity.email, identity.role, requirement
                );
                GuardState::Denied(Denial {
                    reason: DenialReason::RoleMismatch,
                    redirect: Redirect::to(&self.forbidden_path).resuming(requested),
                })
            }
            _ => GuardState::Granted,
        }
    }
}
