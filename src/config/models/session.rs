//! Session marker storage configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Session marker storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Storage backend
    #[serde(default)]
    pub backend: SessionBackend,
    /// File used by the file backend
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Key of the access marker
    #[serde(default = "default_access_key")]
    pub access_key: String,
    /// Key of the refresh marker
    #[serde(default = "default_refresh_key")]
    pub refresh_key: String,
}

/// Session marker storage backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    /// Process-local map, lost on exit
    #[default]
    Memory,
    /// JSON file on disk
    File,
}

impl std::str::FromStr for SessionBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(SessionBackend::Memory),
            "file" => Ok(SessionBackend::File),
            _ => Err(format!("Unknown session backend: {}", s)),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend: SessionBackend::default(),
            path: None,
            access_key: default_access_key(),
            refresh_key: default_refresh_key(),
        }
    }
}

impl SessionConfig {
    /// Merge session configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.backend != SessionBackend::default() {
            self.backend = other.backend;
        }
        if other.path.is_some() {
            self.path = other.path;
        }
        if other.access_key != default_access_key() {
            self.access_key = other.access_key;
        }
        if other.refresh_key != default_refresh_key() {
            self.refresh_key = other.refresh_key;
        }
        self
    }
}
