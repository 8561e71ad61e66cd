//! Common test utilities for bookms-auth
//!
//! # Usage
//!
//! ```rust
//! use crate::common::{IdentityFactory, TestAuth};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let auth = TestAuth::new().await;
//!     let admin = IdentityFactory::admin();
//!     // ...
//! }
//! ```

pub mod fixtures;

pub use fixtures::{ADMIN_EMAIL, ADMIN_PASSWORD, IdentityFactory, TestAuth};
