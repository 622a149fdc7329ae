//! User profiles kept in browser local storage, keyed by display name.
//!
//! The whole profile table is stored as one JSON object under a single key,
//! `{ "<name>": { "name", "progress": { "level1MaxStage" }, "challengeAttempts" } }`.

use std::cell::RefCell;
use std::collections::BTreeMap;

use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::{ProfileError, StoreError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub level1_max_stage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub progress: Progress,
    pub challenge_attempts: u32,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, unlocked_stages: u32, attempts: u32) -> Self {
        Self {
            name: name.into(),
            progress: Progress {
                level1_max_stage: unlocked_stages,
            },
            challenge_attempts: attempts,
        }
    }

    pub fn is_stage_unlocked(&self, stage: u32) -> bool {
        stage >= 1 && stage <= self.progress.level1_max_stage
    }

    /// The profile with its max stage raised to `stage`, or `None` when that
    /// would not raise it. The stored max stage never goes down.
    pub fn with_max_stage(&self, stage: u32) -> Option<UserProfile> {
        if stage <= self.progress.level1_max_stage {
            return None;
        }
        let mut updated = self.clone();
        updated.progress.level1_max_stage = stage;
        Some(updated)
    }

    /// The profile with one challenge attempt used, or `None` if none are left.
    pub fn with_attempt_used(&self) -> Option<UserProfile> {
        let remaining = self.challenge_attempts.checked_sub(1)?;
        let mut updated = self.clone();
        updated.challenge_attempts = remaining;
        Some(updated)
    }
}

/// Raw text persistence for the serialized profile table.
pub trait ProfileStore {
    fn read(&self) -> Result<Option<String>, StoreError>;
    fn write(&self, data: &str) -> Result<(), StoreError>;
}

/// `window.localStorage` under a fixed key.
pub struct LocalStorageStore {
    key: &'static str,
}

impl LocalStorageStore {
    /// Fails when the browser denies storage access (private mode, sandboxed
    /// frames).
    pub fn open(key: &'static str) -> Result<Self, StoreError> {
        let store = Self { key };
        store.storage()?;
        Ok(store)
    }

    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        window
            .local_storage()
            .map_err(|e| StoreError::Access(format!("{e:?}")))?
            .ok_or(StoreError::Unavailable)
    }
}

impl ProfileStore for LocalStorageStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(self.key)
            .map_err(|e| StoreError::Access(format!("{e:?}")))
    }

    fn write(&self, data: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(self.key, data)
            .map_err(|e| StoreError::Access(format!("{e:?}")))
    }
}

/// Session-only store, used when local storage is unavailable.
#[derive(Default)]
pub struct MemoryStore {
    data: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn with_contents(data: impl Into<String>) -> Self {
        Self {
            data: RefCell::new(Some(data.into())),
        }
    }
}

impl ProfileStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.data.borrow().clone())
    }

    fn write(&self, data: &str) -> Result<(), StoreError> {
        *self.data.borrow_mut() = Some(data.to_string());
        Ok(())
    }
}

/// Local storage when the browser allows it, memory otherwise.
pub enum BrowserStore {
    Local(LocalStorageStore),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open(key: &'static str) -> Self {
        match LocalStorageStore::open(key) {
            Ok(store) => BrowserStore::Local(store),
            Err(e) => {
                warn!("local storage unavailable ({e}), progress will not persist");
                BrowserStore::Memory(MemoryStore::default())
            }
        }
    }
}

impl ProfileStore for BrowserStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        match self {
            BrowserStore::Local(s) => s.read(),
            BrowserStore::Memory(s) => s.read(),
        }
    }

    fn write(&self, data: &str) -> Result<(), StoreError> {
        match self {
            BrowserStore::Local(s) => s.write(data),
            BrowserStore::Memory(s) => s.write(data),
        }
    }
}

/// Profile operations over a [`ProfileStore`].
pub struct ProfileBook<S> {
    store: S,
    unlocked_stages: u32,
    attempts: u32,
    max_stage: u32,
}

impl<S: ProfileStore> ProfileBook<S> {
    pub fn new(store: S, config: &AppConfig, max_stage: u32) -> Self {
        Self {
            store,
            unlocked_stages: config.initial_unlocked_stages.min(max_stage),
            attempts: config.initial_challenge_attempts,
            max_stage,
        }
    }

    /// Every stored profile. Unreadable or corrupt data reads as empty.
    pub fn load_all(&self) -> BTreeMap<String, UserProfile> {
        let raw = match self.store.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return BTreeMap::new(),
            Err(e) => {
                error!("failed to read profiles: {e}");
                return BTreeMap::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            error!("stored profiles are corrupt, starting fresh: {e}");
            BTreeMap::new()
        })
    }

    /// The latest stored copy of a profile.
    pub fn get(&self, name: &str) -> Option<UserProfile> {
        self.load_all().remove(name)
    }

    pub fn save(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        let mut all = self.load_all();
        all.insert(profile.name.clone(), profile.clone());
        let data = serde_json::to_string(&all).map_err(StoreError::from)?;
        self.store.write(&data)?;
        Ok(())
    }

    /// Loads the named profile, creating and saving a fresh one on first use.
    pub fn login(&self, name: &str) -> Result<UserProfile, ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::BlankName);
        }
        if let Some(existing) = self.load_all().remove(name) {
            info!("welcome back, {name}");
            return Ok(existing);
        }
        let profile = UserProfile::new(name, self.unlocked_stages, self.attempts);
        self.save(&profile)?;
        info!("created profile for {name}");
        Ok(profile)
    }

    /// Raises the unlocked stage to `stage` (capped at the last stage) and
    /// persists it. Returns the profile unchanged if nothing was raised.
    pub fn unlock_stage(&self, profile: &UserProfile, stage: u32) -> Result<UserProfile, ProfileError> {
        match profile.with_max_stage(stage.min(self.max_stage)) {
            Some(updated) => {
                self.save(&updated)?;
                info!("{} unlocked stage {}", updated.name, updated.progress.level1_max_stage);
                Ok(updated)
            }
            None => Ok(profile.clone()),
        }
    }

    /// Uses one handwriting attempt. `Ok(None)` when none are left.
    pub fn use_attempt(&self, profile: &UserProfile) -> Result<Option<UserProfile>, ProfileError> {
        let Some(updated) = profile.with_attempt_used() else {
            return Ok(None);
        };
        self.save(&updated)?;
        Ok(Some(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> ProfileBook<MemoryStore> {
        ProfileBook::new(MemoryStore::default(), &AppConfig::default(), 8)
    }

    #[test]
    fn login_creates_default_profile() {
        let book = book();
        let p = book.login("  Ada ").unwrap();
        assert_eq!(p, UserProfile::new("Ada", 3, 3));
        assert!(p.is_stage_unlocked(3));
        assert!(!p.is_stage_unlocked(4));
        assert!(!p.is_stage_unlocked(0));
        assert!(book.load_all().contains_key("Ada"));
    }

    #[test]
    fn login_returns_existing_profile() {
        let book = book();
        let p = book.login("Ada").unwrap();
        book.unlock_stage(&p, 5).unwrap();
        assert_eq!(book.login("Ada").unwrap().progress.level1_max_stage, 5);
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(matches!(book().login("   "), Err(ProfileError::BlankName)));
    }

    #[test]
    fn max_stage_never_decreases() {
        let book = book();
        let p = book.login("Ada").unwrap();
        let p = book.unlock_stage(&p, 6).unwrap();
        let p = book.unlock_stage(&p, 4).unwrap();
        assert_eq!(p.progress.level1_max_stage, 6);
        assert_eq!(book.login("Ada").unwrap().progress.level1_max_stage, 6);
    }

    #[test]
    fn max_stage_is_capped() {
        let book = book();
        let p = book.login("Ada").unwrap();
        let p = book.unlock_stage(&p, 99).unwrap();
        assert_eq!(p.progress.level1_max_stage, 8);
    }

    #[test]
    fn attempts_run_out() {
        let book = book();
        let mut p = book.login("Ada").unwrap();
        for left in (0..3).rev() {
            p = book.use_attempt(&p).unwrap().unwrap();
            assert_eq!(p.challenge_attempts, left);
        }
        assert!(book.use_attempt(&p).unwrap().is_none());
        assert_eq!(book.login("Ada").unwrap().challenge_attempts, 0);
    }

    #[test]
    fn corrupt_storage_reads_as_empty() {
        let book = ProfileBook::new(MemoryStore::with_contents("{not json"), &AppConfig::default(), 8);
        assert!(book.load_all().is_empty());
        let p = book.login("Ada").unwrap();
        assert_eq!(p.progress.level1_max_stage, 3);
    }

    #[test]
    fn storage_format_uses_camel_case() {
        let store = MemoryStore::default();
        let book = ProfileBook::new(store, &AppConfig::default(), 8);
        book.login("Ada").unwrap();
        let raw = book.store.read().unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["Ada"]["progress"]["level1MaxStage"], 3);
        assert_eq!(json["Ada"]["challengeAttempts"], 3);
        assert_eq!(json["Ada"]["name"], "Ada");
    }

    #[test]
    fn several_users_coexist() {
        let book = book();
        book.login("Ada").unwrap();
        book.login("Grace").unwrap();
        assert_eq!(book.load_all().len(), 2);
        assert_eq!(book.get("Grace").unwrap().name, "Grace");
        assert!(book.get("Linus").is_none());
    }
}
