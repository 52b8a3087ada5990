// ABOUTME: Disk-backed cache of JSON values with TTL-based staleness checks
// ABOUTME: One file per key under the per-user cache directory; misses are silent

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants;

/// One cached value plus its write time.
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    data: Value,
    timestamp: DateTime<Utc>,
}

/// Key/value persistence under a fixed per-user directory.
///
/// Reads degrade to misses on any problem; only writes report errors, and the
/// caller decides whether those matter.
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    /// Open the store at the standard per-user location. The directory is not
    /// created until the first write.
    pub fn open() -> Result<Self> {
        let dir = dirs::cache_dir()
            .context("no user cache directory available on this system")?
            .join(constants::cache::DIR_NAME);
        Ok(Self { dir })
    }

    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Look up a value no older than `ttl`. Absent, unreadable, malformed, and
    /// expired entries are all misses, logged at debug level so disk problems
    /// stay diagnosable without blocking the run.
    pub fn get(&self, key: &str, ttl: Duration) -> Option<Value> {
        let path = self.entry_path(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                log::debug!("cache miss for {key}: {err}");
                return None;
            }
        };

        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(err) => {
                log::debug!("cache entry {key} is malformed, refetching: {err}");
                return None;
            }
        };

        let ttl = chrono::Duration::from_std(ttl).ok()?;
        if Utc::now().signed_duration_since(entry.timestamp) > ttl {
            log::debug!("cache entry {key} expired");
            return None;
        }

        Some(entry.data)
    }

    /// Serialize `value` with the current time, fully replacing any prior
    /// entry for `key`.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create cache directory {}", self.dir.display()))?;

        let entry = CacheEntry {
            data: serde_json::to_value(value)?,
            timestamp: Utc::now(),
        };
        let body = serde_json::to_string(&entry)?;

        fs::write(self.entry_path(key), body)
            .with_context(|| format!("failed to write cache entry {key}"))
    }

    /// Remove every persisted entry. A store that was never written is fine.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_dir_all(&self.dir) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| {
                format!("failed to remove cache directory {}", self.dir.display())
            }),
        }
    }
}
