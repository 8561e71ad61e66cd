//! Route guarding
//!
//! Consumers of the access decision functions that turn a navigation attempt
//! into render, redirect or wait.

mod guard;
mod routes;

pub use guard::{Denial, DenialReason, GuardState, Redirect, RouteGuard};
pub use routes::{
    Navigation, RouteAccess, RouteDef, RouteTable, Router, forbidden_back_path, home_path,
};
