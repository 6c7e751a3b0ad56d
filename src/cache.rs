//! Persisted champion name cache.
//!
//! Champion display names almost never change, so every successful lookup is
//! kept in a JSON file keyed by champion id together with the time it was
//! stored. Entries older than the configured TTL are treated as misses and get
//! overwritten on the next refetch. Nothing is ever evicted.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::AppError;

/// Default freshness window of a cached name: one week.
pub const DEFAULT_TTL: Duration = Duration::from_secs(604_800);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionEntry {
    pub name: String,
    /// Unix timestamp in seconds.
    pub time: u64,
}

/// On-disk and in-memory representation, keyed by the champion id as a string.
type ChampionMap = HashMap<String, ChampionEntry>;

#[derive(Debug)]
pub struct ChampionCache {
    path: PathBuf,
    ttl: u64,
    entries: Mutex<ChampionMap>,
}

impl ChampionCache {
    /// Load the cache backed by `path`.
    ///
    /// A missing or unreadable file starts the cache empty.
    pub async fn load(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        let path = path.into();
        let entries = read_entries(&path).await;

        Self {
            path,
            ttl: ttl.as_secs(),
            entries: Mutex::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Cached name of the champion, if present and still fresh.
    pub async fn lookup(&self, champion_id: i32) -> Option<String> {
        let entries = self.entries.lock().await;

        entries
            .get(&champion_id.to_string())
            .filter(|entry| self.is_fresh(entry, now_secs()))
            .map(|entry| entry.name.clone())
    }

    /// Record a name fetched from upstream and persist the whole mapping.
    ///
    /// A fresh entry only has its timestamp refreshed, the stored name is kept.
    /// A missing or stale entry is replaced.
    pub async fn store(&self, champion_id: i32, name: &str) -> Result<(), AppError> {
        let mut entries = self.entries.lock().await;
        let now = now_secs();
        let key = champion_id.to_string();

        match entries.get_mut(&key) {
            Some(entry) if self.is_fresh(entry, now) => {
                debug!("[CACHE] refreshing champion {} ({})", champion_id, entry.name);
                entry.time = now;
            }
            _ => {
                debug!("[CACHE] storing champion {} as {}", champion_id, name);
                entries.insert(
                    key,
                    ChampionEntry {
                        name: name.to_string(),
                        time: now,
                    },
                );
            }
        }

        write_entries(&self.path, &entries).await
    }

    /// Copy of the stored entry, fresh or not.
    #[cfg(test)]
    pub async fn entry(&self, champion_id: i32) -> Option<ChampionEntry> {
        self.entries
            .lock()
            .await
            .get(&champion_id.to_string())
            .cloned()
    }

    fn is_fresh(&self, entry: &ChampionEntry, now: u64) -> bool {
        now.saturating_sub(entry.time) < self.ttl
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

async fn read_entries(path: &Path) -> ChampionMap {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(_) => {
            info!("📜 No champion cache found at {:?}, starting empty", path);
            return ChampionMap::new();
        }
    };

    match serde_json::from_str::<ChampionMap>(&contents) {
        Ok(entries) => {
            info!("📜 Loaded {} cached champions from {:?}", entries.len(), path);
            entries
        }
        Err(e) => {
            warn!("Failed to parse champion cache {:?}: {}", path, e);
            ChampionMap::new()
        }
    }
}

async fn write_entries(path: &Path, entries: &ChampionMap) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let json = serde_json::to_vec(entries).map_err(std::io::Error::other)?;
    tokio::fs::write(path, json).await?;

    Ok(())
}
