//! Storage adapters behind the profile store.
//!
//! The core is storage-agnostic: it exchanges whole-state snapshots with an
//! adapter and never touches the medium itself.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::AppConfig;
use crate::models::{Profile, ProfileView};

/// Whole-store state exchanged with an adapter. Ordered maps keep snapshots
/// byte-stable across runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreState {
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
    #[serde(default)]
    pub views: BTreeMap<String, Vec<ProfileView>>,
}

pub trait StorageAdapter: Send + Sync {
    fn load(&self) -> Result<StoreState>;
    fn save(&self, state: &StoreState) -> Result<()>;
}

/// Keeps nothing durable: loads empty, discards saves.
#[derive(Debug, Default)]
pub struct MemoryAdapter;

impl StorageAdapter for MemoryAdapter {
    fn load(&self) -> Result<StoreState> {
        Ok(StoreState::default())
    }

    fn save(&self, _state: &StoreState) -> Result<()> {
        Ok(())
    }
}

/// Persists the store as a single pretty-JSON snapshot file.
pub struct JsonSnapshotAdapter {
    path: PathBuf,
}

impl JsonSnapshotAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(config.snapshot_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageAdapter for JsonSnapshotAdapter {
    fn load(&self) -> Result<StoreState> {
        if !self.path.exists() {
            return Ok(StoreState::default());
        }
        // A pure re-read is safe to retry once before surfacing the failure.
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(_) => fs::read(&self.path)
                .with_context(|| format!("Failed reading snapshot {}", self.path.display()))?,
        };
        serde_json::from_slice(&data)
            .with_context(|| format!("Failed parsing snapshot {}", self.path.display()))
    }

    fn save(&self, state: &StoreState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed creating snapshot directory {}", parent.display())
            })?;
        }
        let payload = serde_json::to_vec_pretty(state)
            .with_context(|| format!("Failed serializing snapshot {}", self.path.display()))?;
        let hash = compute_hash(&payload);
        fs::write(&self.path, &payload)
            .with_context(|| format!("Failed writing snapshot {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), %hash, "persisted store snapshot");
        Ok(())
    }
}

/// Lowercase hex SHA-256 of a snapshot payload.
pub fn compute_hash(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{:x}", digest)
}
