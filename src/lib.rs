//! # BookMS Auth
//!
//! Role-based access control core of the BookMS dashboard.
//!
//! ## Features
//!
//! - **Role Hierarchy**: `User < Admin < SuperAdmin`, higher roles inherit lower permissions
//! - **Access Decisions**: Pure `has_role` / `has_any_role` / `can_access` functions
//! - **Session State**: Single live identity with a loading flag and persisted markers
//! - **Route Guarding**: Pending, granted or denied with the original destination preserved
//! - **Sidebar Filtering**: Role-gated sections and entries projected per viewer
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bookms_auth::{AuthSystem, Config, Navigation};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/bookms.yaml").await?;
//!     let auth = AuthSystem::from_config(&config).await?;
//!
//!     auth.login("admin@bookms.com", "password123").await?;
//!
//!     match auth.navigate("/management/roles") {
//!         Navigation::Render { title, .. } => println!("Showing {}", title),
//!         Navigation::Denied(denial) => println!("Sent to {}", denial.redirect.to),
//!         other => println!("{:?}", other),
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod navigation;
pub mod routing;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{BookmsError, Result};

pub use auth::{
    AccessRequirement, AuthBackend, AuthSystem, DemoAuthBackend, RegisterData, SessionSnapshot,
    SessionState, SessionStore, can_access, has_any_role, has_role,
};
pub use core::models::{Identity, IdentityProvider, SsoProvider, UserRole};
pub use navigation::{NavItem, NavSection, Sidebar};
pub use routing::{GuardState, Navigation, RouteAccess, RouteGuard, RouteTable, Router};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build metadata stamped by the build script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Seconds since the Unix epoch
    pub build_time: &'static str,
    pub git_hash: &'static str,
    pub rust_version: &'static str,
}

/// Build metadata of this binary
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: VERSION,
        build_time: env!("BUILD_TIME"),
        git_hash: env!("GIT_HASH"),
        rust_version: env!("RUST_VERSION"),
    }
}
