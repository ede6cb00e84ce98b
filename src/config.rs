//! Per-install configuration.
//!
//! Stored as a machine-readable TOML file located at:
//!   %APPDATA%/dietbase/config.toml on Windows
//!   $XDG_CONFIG_HOME/dietbase/config.toml on Linux
//!   ~/Library/Application Support/dietbase/config.toml on macOS
//!
//! The config tracks where the snapshot adapter keeps its data and the
//! fallback display-language tag. Extraction behavior is never configurable;
//! the matching tables are fixed.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Snapshot storage options.
    #[serde(default)]
    pub storage: StorageSettings,
    /// Display-language tag suggested for new profiles (rendering only).
    #[serde(default)]
    pub default_language: Option<String>,
}

/// Where the JSON snapshot adapter keeps the store state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Overrides the per-platform data directory when set.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// File name of the whole-store snapshot inside the data directory.
    #[serde(default = "default_snapshot_file")]
    pub snapshot_file: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: None,
            snapshot_file: default_snapshot_file(),
        }
    }
}

fn default_snapshot_file() -> String {
    "profiles.json".to_string()
}

impl AppConfig {
    /// Reads the per-install config if present, defaults otherwise.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed reading config {}", path.display()))?;
        toml::from_str(&data).with_context(|| format!("Failed parsing config {}", path.display()))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Full path of the store snapshot file this install should use.
    pub fn snapshot_path(&self) -> Result<PathBuf> {
        let dir = match &self.storage.data_dir {
            Some(dir) => dir.clone(),
            None => project_dirs()?.data_dir().to_path_buf(),
        };
        Ok(dir.join(&self.storage.snapshot_file))
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "dietbase")
        .context("Could not resolve a home directory for dietbase")
}
