//! Role-Based Access Control (RBAC)
//!
//! Roles are hierarchical: a requirement naming a role is met by that role and
//! every role ranked above it.

mod policy;
mod types;

pub use policy::{can_access, has_any_role, has_role};
pub use types::AccessRequirement;
