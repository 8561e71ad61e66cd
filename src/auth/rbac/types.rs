//! RBAC type definitions

use crate::core::models::UserRole;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Roles a protected resource accepts
///
/// An empty requirement means "any authenticated identity". A requirement is
/// satisfied when the viewer's role ranks at least as high as one of its
/// roles, so `[Admin]` also admits `SuperAdmin`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessRequirement {
    roles: BTreeSet<UserRole>,
}

impl AccessRequirement {
    /// Requirement met by any authenticated identity
    pub fn authenticated() -> Self {
        Self::default()
    }

    /// Requirement met by any of the given roles
    pub fn any_of<I: IntoIterator<Item = UserRole>>(roles: I) -> Self {
        Self {
            roles: roles.into_iter().collect(),
        }
    }

    /// `[Admin, SuperAdmin]`, the gate of the management area
    pub fn admin() -> Self {
        Self::any_of([UserRole::Admin, UserRole::SuperAdmin])
    }

    /// `[SuperAdmin]`
    pub fn super_admin() -> Self {
        Self::any_of([UserRole::SuperAdmin])
    }

    /// Accepted roles, ascending by rank
    pub fn roles(&self) -> impl Iterator<Item = UserRole> + '_ {
        self.roles.iter().copied()
    }

    /// Accepted roles as an owned list
    pub fn to_vec(&self) -> Vec<UserRole> {
        self.roles.iter().copied().collect()
    }

    /// Whether only authentication is required
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Lowest-ranked accepted role; any role at or above it passes
    pub fn minimum_role(&self) -> Option<UserRole> {
        self.roles.first().copied()
    }
}

impl From<&[UserRole]> for AccessRequirement {
    fn from(roles: &[UserRole]) -> Self {
        Self::any_of(roles.iter().copied())
    }
}

impl<const N: usize> From<[UserRole; N]> for AccessRequirement {
    fn from(roles: [UserRole; N]) -> Self {
        Self::any_of(roles)
    }
}

impl std::fmt::Display for AccessRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.roles.is_empty() {
            return f.write_str("authenticated");
        }
        let names: Vec<&str> = self.roles.iter().map(|role| role.as_str()).collect();
        write!(f, "{}", names.join(" | "))
    }
}
