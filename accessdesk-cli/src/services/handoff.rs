//! Cross-screen record handoff.
//!
//! Independently routed screens pass a selected record through a small
//! JSON key-value store on disk: the writer serializes under a known key
//! before navigating, the reader parses after mounting and falls back to
//! a default when the key is absent or unreadable.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Key used to pass the opened user record to the profile screen.
pub const SHARED_PROFILE_KEY: &str = "shared-profile";

#[derive(Debug, Clone)]
pub struct Handoff {
    dir: PathBuf,
}

impl Handoff {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Serialize `value` under `key`, replacing any previous value.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create handoff dir {}", self.dir.display()))?;
        let json = serde_json::to_string_pretty(value)?;
        let path = self.path(key);
        fs::write(&path, json)
            .with_context(|| format!("Failed to write handoff key {}", path.display()))?;
        Ok(())
    }

    /// Read `key` if present and parseable.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let content = fs::read_to_string(self.path(key)).ok()?;
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("discarding unparseable handoff key {key}: {err}");
                None
            }
        }
    }

    /// Read `key`, falling back to `default` on absence or parse failure.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    pub fn remove(&self, key: &str) {
        let _ = fs::remove_file(self.path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProfileRecord;

    fn handoff() -> (tempfile::TempDir, Handoff) {
        let dir = tempfile::tempdir().unwrap();
        let handoff = Handoff::new(dir.path().join("handoff"));
        (dir, handoff)
    }

    #[test]
    fn test_put_then_get() {
        let (_guard, handoff) = handoff();
        let mut record = ProfileRecord::default();
        record.display_name = "Jane Doe".into();
        handoff.put(SHARED_PROFILE_KEY, &record).unwrap();
        let read: ProfileRecord = handoff.get(SHARED_PROFILE_KEY).unwrap();
        assert_eq!(read.display_name, "Jane Doe");
    }

    #[test]
    fn test_absent_key_falls_back_to_default() {
        let (_guard, handoff) = handoff();
        let record: ProfileRecord = handoff.get_or("missing", ProfileRecord::default());
        assert_eq!(record.display_name, "John Doe");
    }

    #[test]
    fn test_corrupt_value_falls_back_to_default() {
        let (_guard, handoff) = handoff();
        fs::create_dir_all(handoff.dir.clone()).unwrap();
        fs::write(handoff.path(SHARED_PROFILE_KEY), "{not json").unwrap();
        let record: ProfileRecord =
            handoff.get_or(SHARED_PROFILE_KEY, ProfileRecord::default());
        assert_eq!(record.display_name, "John Doe");
    }

    #[test]
    fn test_remove_is_total() {
        let (_guard, handoff) = handoff();
        handoff.remove("never-written");
        handoff.put("key", &ProfileRecord::default()).unwrap();
        handoff.remove("key");
        assert!(handoff.get::<ProfileRecord>("key").is_none());
    }

    #[test]
    fn test_partial_record_tolerated() {
        let (_guard, handoff) = handoff();
        fs::create_dir_all(handoff.dir.clone()).unwrap();
        fs::write(
            handoff.path(SHARED_PROFILE_KEY),
            r#"{"display_name": "Only Name"}"#,
        )
        .unwrap();
        let record: ProfileRecord =
            handoff.get_or(SHARED_PROFILE_KEY, ProfileRecord::default());
        assert_eq!(record.display_name, "Only Name");
        // Unlisted fields come from the default record.
        assert_eq!(record.first_name, "John");
    }
}
