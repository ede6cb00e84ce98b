//! Keyed profile storage with additive merge semantics and a per-profile
//! view-event log.

mod adapter;

pub use adapter::{compute_hash, JsonSnapshotAdapter, MemoryAdapter, StorageAdapter, StoreState};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::Result;
use chrono::Utc;

use crate::models::{Profile, ProfileView, Restriction};

/// Owns every profile and view record for the process lifetime. Constructed
/// once at application start and passed by reference to callers.
///
/// The registry maps are guarded by `RwLock`; each profile record and each
/// view log sits behind its own `Mutex`, so a read-modify-write cycle is
/// atomic per id and independent ids never contend.
pub struct ProfileStore {
    adapter: Box<dyn StorageAdapter>,
    profiles: RwLock<HashMap<String, Arc<Mutex<Profile>>>>,
    views: RwLock<HashMap<String, Arc<Mutex<Vec<ProfileView>>>>>,
}

impl ProfileStore {
    /// Loads the adapter's state and serves it from memory thereafter.
    pub fn new(adapter: Box<dyn StorageAdapter>) -> Result<Self> {
        let state = adapter.load()?;
        let profiles = state
            .profiles
            .into_iter()
            .map(|(id, profile)| (id, Arc::new(Mutex::new(profile))))
            .collect();
        let views = state
            .views
            .into_iter()
            .map(|(id, log)| (id, Arc::new(Mutex::new(log))))
            .collect();
        Ok(Self {
            adapter,
            profiles: RwLock::new(profiles),
            views: RwLock::new(views),
        })
    }

    /// A store backed by [`MemoryAdapter`]; nothing survives the process.
    pub fn in_memory() -> Self {
        Self {
            adapter: Box::new(MemoryAdapter),
            profiles: RwLock::new(HashMap::new()),
            views: RwLock::new(HashMap::new()),
        }
    }

    /// Create-or-reset: always succeeds and replaces any existing profile
    /// under the same id, with both timestamps set to now.
    pub fn create_profile(&self, id: &str, restrictions: Vec<Restriction>) -> Result<Profile> {
        let profile = Profile::new(id, restrictions);
        {
            let mut profiles = write_guard(&self.profiles);
            profiles.insert(id.to_string(), Arc::new(Mutex::new(profile.clone())));
        }
        self.persist()?;
        tracing::info!(profile_id = id, "created profile");
        Ok(profile)
    }

    pub fn get_profile(&self, id: &str) -> Option<Profile> {
        let cell = read_guard(&self.profiles).get(id).cloned()?;
        let profile = lock(&cell).clone();
        Some(profile)
    }

    /// Replaces the restriction list verbatim. Returns `None` if no profile
    /// exists for `id`; never implicitly creates one.
    pub fn update_profile(
        &self,
        id: &str,
        restrictions: Vec<Restriction>,
    ) -> Result<Option<Profile>> {
        let Some(cell) = read_guard(&self.profiles).get(id).cloned() else {
            return Ok(None);
        };
        let updated = {
            let mut profile = lock(&cell);
            profile.restrictions = restrictions;
            profile.last_modified = Utc::now();
            profile.clone()
        };
        self.persist()?;
        Ok(Some(updated))
    }

    /// Additive merge used by the chat flow. Creates the profile lazily when
    /// absent. A candidate whose item already exists (case-insensitive) is
    /// dropped: stored entries are never overwritten by a merge, even at
    /// higher confidence or a different kind, so manual corrections survive
    /// conversational re-mentions.
    pub fn merge_new_restrictions(
        &self,
        id: &str,
        candidates: Vec<Restriction>,
    ) -> Result<Profile> {
        let cell = {
            let mut profiles = write_guard(&self.profiles);
            profiles
                .entry(id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(Profile::new(id, Vec::new()))))
                .clone()
        };
        let (merged, appended) = {
            let mut profile = lock(&cell);
            let mut appended = 0usize;
            for candidate in candidates {
                if !profile.contains_item(&candidate.item) {
                    profile.restrictions.push(candidate);
                    appended += 1;
                }
            }
            if appended > 0 {
                profile.last_modified = Utc::now();
            }
            (profile.clone(), appended)
        };
        self.persist()?;
        tracing::debug!(profile_id = id, appended, "merged extracted restrictions");
        Ok(merged)
    }

    /// True if a profile existed and was removed. The view log is an audit
    /// record and is left intact.
    pub fn delete_profile(&self, id: &str) -> Result<bool> {
        let removed = write_guard(&self.profiles).remove(id).is_some();
        if removed {
            self.persist()?;
            tracing::info!(profile_id = id, "deleted profile");
        }
        Ok(removed)
    }

    /// Sets the display-language tag. Returns `None` for an unknown id.
    pub fn set_profile_language(
        &self,
        id: &str,
        language: Option<String>,
    ) -> Result<Option<Profile>> {
        let Some(cell) = read_guard(&self.profiles).get(id).cloned() else {
            return Ok(None);
        };
        let updated = {
            let mut profile = lock(&cell);
            profile.language = language;
            profile.last_modified = Utc::now();
            profile.clone()
        };
        self.persist()?;
        Ok(Some(updated))
    }

    /// Always appends, including for ids with no stored profile: a public
    /// link can be viewed before its owner ever persists anything.
    pub fn record_profile_view(
        &self,
        id: &str,
        language: Option<String>,
        viewer_id: Option<String>,
    ) -> Result<()> {
        let cell = {
            let mut views = write_guard(&self.views);
            views.entry(id.to_string()).or_default().clone()
        };
        lock(&cell).push(ProfileView::new(language, viewer_id));
        self.persist()?;
        Ok(())
    }

    pub fn get_profile_views(&self, id: &str) -> Vec<ProfileView> {
        match read_guard(&self.views).get(id) {
            Some(cell) => lock(cell).clone(),
            None => Vec::new(),
        }
    }

    /// Every stored profile, ordered by id.
    pub fn all_profiles(&self) -> Vec<Profile> {
        self.snapshot().profiles.into_values().collect()
    }

    /// Drops every profile and view record, then persists the empty state.
    pub fn clear_all(&self) -> Result<()> {
        write_guard(&self.profiles).clear();
        write_guard(&self.views).clear();
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let state = self.snapshot();
        self.adapter.save(&state)
    }

    fn snapshot(&self) -> StoreState {
        let profiles = read_guard(&self.profiles)
            .iter()
            .map(|(id, cell)| (id.clone(), lock(cell).clone()))
            .collect();
        let views = read_guard(&self.views)
            .iter()
            .map(|(id, cell)| (id.clone(), lock(cell).clone()))
            .collect();
        StoreState { profiles, views }
    }
}

// Poisoned guards are recovered rather than propagated: every critical
// section leaves its record in a consistent state.
fn lock<T>(cell: &Mutex<T>) -> MutexGuard<'_, T> {
    cell.lock().unwrap_or_else(PoisonError::into_inner)
}

fn read_guard<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_guard<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
