use anyhow::Result;
use dietbase::{Extractor, JsonSnapshotAdapter, ProfileStore};

use super::IntegrationHarness;

pub struct StoreFixture {
    pub harness: IntegrationHarness,
}

impl StoreFixture {
    pub fn new() -> Self {
        Self {
            harness: IntegrationHarness::new(),
        }
    }

    pub fn memory_store(&self) -> ProfileStore {
        ProfileStore::in_memory()
    }

    pub fn file_store(&self) -> Result<ProfileStore> {
        let adapter = JsonSnapshotAdapter::new(self.harness.snapshot_path());
        ProfileStore::new(Box::new(adapter))
    }
}

pub fn extractor() -> Result<Extractor> {
    Extractor::new()
}
