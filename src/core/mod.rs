//! Core domain models

pub mod models;
