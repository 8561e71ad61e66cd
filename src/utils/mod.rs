//! Utility modules
//!
//! - **error**: Error types and constructors
//! - **logging**: Subscriber setup for the binary
//! - **validation**: Email and route validation shared by config and sign-up

pub mod error;
pub mod logging;
pub mod validation;
