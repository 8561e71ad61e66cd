//! Identity models
//!
//! This module defines the signed-in principal and the role hierarchy.

pub mod role;
pub mod types;
