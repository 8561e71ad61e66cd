//! Access decision functions
//!
//! Pure functions shared by route guarding and conditional rendering. They
//! only look at their arguments.

use super::types::AccessRequirement;
use crate::core::models::{Identity, UserRole};

/// Whether `identity` is present and its role ranks at least as high as `role`
pub fn has_role(identity: Option<&Identity>, role: UserRole) -> bool {
    identity.is_some_and(|identity| identity.role.satisfies(role))
}

/// Whether `identity` is present and satisfies at least one of `roles`
///
/// An empty role list is satisfied by any present identity.
pub fn has_any_role(identity: Option<&Identity>, roles: &[UserRole]) -> bool {
    match identity {
        None => false,
        Some(_) if roles.is_empty() => true,
        Some(_) => roles.iter().any(|role| has_role(identity, *role)),
    }
}

/// Whether `identity` may reach a resource guarded by `requirement`
pub fn can_access(identity: Option<&Identity>, requirement: &AccessRequirement) -> bool {
    match identity {
        None => false,
        Some(_) if requirement.is_empty() => true,
        Some(_) => requirement.roles().any(|role| has_role(identity, role)),
    }
}
