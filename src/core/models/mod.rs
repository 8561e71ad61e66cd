//! Core data models
//!
//! This module defines the identity and role types shared by every component.

pub mod user;

// Re-export commonly used types
pub use user::role::UserRole;
pub use user::types::{Identity, IdentityProvider, SsoProvider};
