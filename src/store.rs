//! Keyed blob store mirroring the browser-local persistence contract.
//!
//! Each key holds one independent JSON blob (profile, skills, goals,
//! learning style). Reads fill defaults: a missing key, an unreadable blob,
//! or a blob from an older writer all come back as the type's default shape
//! rather than an error. Writes happen synchronously per state change and are
//! persisted best-effort to STATE_PATH when set; otherwise the store is
//! memory-only and lives for the process.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

pub const KEY_PROFILE: &str = "edubuddy_user_profile";
pub const KEY_SKILLS: &str = "edubuddy_skills";
pub const KEY_GOALS: &str = "edubuddy_goals";
pub const KEY_LEARNING_STYLE: &str = "edubuddy_learning_style";

pub struct BlobStore {
    path: Option<PathBuf>,
    blobs: RwLock<HashMap<String, serde_json::Value>>,
}

impl BlobStore {
    /// Open from STATE_PATH if set; tolerate a missing or corrupt file.
    pub fn open_from_env() -> Self {
        let path = std::env::var("STATE_PATH").ok().map(PathBuf::from);
        let blobs = match &path {
            Some(p) => match std::fs::read_to_string(p) {
                Ok(s) => match serde_json::from_str::<HashMap<String, serde_json::Value>>(&s) {
                    Ok(map) => {
                        info!(target: "edubuddy_backend", path = %p.display(), keys = map.len(), "Loaded state file");
                        map
                    }
                    Err(e) => {
                        warn!(target: "edubuddy_backend", path = %p.display(), error = %e, "State file unreadable; starting empty");
                        HashMap::new()
                    }
                },
                Err(_) => {
                    debug!(target: "edubuddy_backend", path = %p.display(), "No state file yet; starting empty");
                    HashMap::new()
                }
            },
            None => HashMap::new(),
        };
        Self { path, blobs: RwLock::new(blobs) }
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self { path: None, blobs: RwLock::new(HashMap::new()) }
    }

    /// Default-filling read: missing key or parse failure yields `T::default()`.
    pub async fn read<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let blobs = self.blobs.read().await;
        match blobs.get(key) {
            Some(v) => match serde_json::from_value(v.clone()) {
                Ok(t) => t,
                Err(e) => {
                    warn!(target: "edubuddy_backend", %key, error = %e, "Blob unreadable; substituting defaults");
                    T::default()
                }
            },
            None => T::default(),
        }
    }

    /// Replace one blob and persist best-effort.
    pub async fn write<T: Serialize>(&self, key: &str, value: &T) {
        let v = match serde_json::to_value(value) {
            Ok(v) => v,
            Err(e) => {
                error!(target: "edubuddy_backend", %key, error = %e, "Failed to serialize blob; write dropped");
                return;
            }
        };
        let snapshot = {
            let mut blobs = self.blobs.write().await;
            blobs.insert(key.to_string(), v);
            self.path.as_ref().map(|_| blobs.clone())
        };
        if let (Some(path), Some(map)) = (&self.path, snapshot) {
            match serde_json::to_string_pretty(&map) {
                Ok(s) => {
                    if let Err(e) = std::fs::write(path, s) {
                        error!(target: "edubuddy_backend", path = %path.display(), error = %e, "Failed to persist state file");
                    }
                }
                Err(e) => {
                    error!(target: "edubuddy_backend", error = %e, "Failed to serialize state file")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SkillMetric, UserProfile};

    #[tokio::test]
    async fn missing_key_reads_as_default() {
        let store = BlobStore::in_memory();
        let profile: UserProfile = store.read(KEY_PROFILE).await;
        assert_eq!(profile.name, "Student");
        let skills: Vec<SkillMetric> = store.read(KEY_SKILLS).await;
        assert!(skills.is_empty());
    }

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let store = BlobStore::in_memory();
        let mut profile = UserProfile::default();
        profile.current_streak = 7;
        store.write(KEY_PROFILE, &profile).await;
        let back: UserProfile = store.read(KEY_PROFILE).await;
        assert_eq!(back.current_streak, 7);
    }

    #[tokio::test]
    async fn unreadable_blob_substitutes_defaults() {
        let store = BlobStore::in_memory();
        store.write(KEY_PROFILE, &serde_json::json!(["not", "a", "profile"])).await;
        let profile: UserProfile = store.read(KEY_PROFILE).await;
        assert_eq!(profile.current_streak, 0);
    }
}
