//! User role hierarchy

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// User role
///
/// Roles form a total order by [`UserRole::rank`]:
///
/// | role         | rank |
/// |--------------|------|
/// | `User`       | 0    |
/// | `Admin`      | 1    |
/// | `SuperAdmin` | 2    |
///
/// A higher-ranked role satisfies every requirement a lower-ranked role
/// satisfies. Every access check in the crate is defined on this order, so
/// adding or reordering variants changes the meaning of all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    /// Regular user
    User,
    /// Administrator
    Admin,
    /// Super administrator
    SuperAdmin,
}

impl UserRole {
    /// Rank of the role in the hierarchy
    pub const fn rank(self) -> u8 {
        match self {
            UserRole::User => 0,
            UserRole::Admin => 1,
            UserRole::SuperAdmin => 2,
        }
    }

    /// Every role, ascending by rank
    pub const fn all() -> [UserRole; 3] {
        [UserRole::User, UserRole::Admin, UserRole::SuperAdmin]
    }

    /// Whether this role is at least as privileged as `required`
    pub fn satisfies(self, required: UserRole) -> bool {
        self.rank() >= required.rank()
    }

    /// Role name as displayed and serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "User",
            UserRole::Admin => "Admin",
            UserRole::SuperAdmin => "SuperAdmin",
        }
    }

    /// CSS class of the role badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            UserRole::User => "role-badge role-badge-user",
            UserRole::Admin => "role-badge role-badge-admin",
            UserRole::SuperAdmin => "role-badge role-badge-superadmin",
        }
    }
}

impl PartialOrd for UserRole {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UserRole {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            "superadmin" | "super_admin" => Ok(UserRole::SuperAdmin),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}
