//! Authentication and authorization
//!
//! This module provides the session holder, the access decision functions and
//! the backend boundary used for sign-in, sign-up and SSO.

pub mod backend;
pub mod rbac;
pub mod session;
mod system;

pub use backend::{AuthBackend, AuthOutcome, DemoAuthBackend, RegisterData, SessionTokens};
pub use rbac::{AccessRequirement, can_access, has_any_role, has_role};
pub use session::{SessionSnapshot, SessionState, SessionStore};
pub use system::AuthSystem;
