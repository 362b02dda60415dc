//! JSON-file-backed persistence for per-user configs.
//!
//! The store is an in-memory map from numeric user id to [`UserConfig`],
//! loaded once at startup and rewritten wholesale to the snapshot file on a
//! fixed timer for the lifetime of the process. The file is a single JSON
//! object:
//!
//! ```json
//! {
//!   "138465": {"levels":["UP","MID"],"effectiveness":"MAX","keepSpookySymbols":false}
//! }
//! ```
//!
//! (serde_json writes the `i64` map keys as JSON strings.)
//!
//! # Read-time defaults
//!
//! Looking up an unknown user returns `UserConfig::default()` *without*
//! inserting it. Inline queries are read-only traffic from arbitrary users;
//! materialising a default entry per reader would grow the store without
//! bound. Entries are only created when a command actually changes state.
//!
//! # Concurrency
//!
//! The dispatcher task and the snapshot task both touch the map, so it lives
//! behind a `tokio::sync::Mutex`. Critical sections are tiny (clone in, clone
//! out); the snapshot serializes a point-in-time copy taken under the lock,
//! and file I/O happens after the lock is released.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use spooky_core::UserConfig;

/// Error type for snapshot file operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing snapshot at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file exists and is non-blank but is not valid JSON.
    #[error("failed to parse snapshot JSON at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory mapping could not be serialized.
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// In-memory config mapping plus its durable snapshot location.
pub struct ConfigStore {
    path: PathBuf,
    configs: Mutex<HashMap<i64, UserConfig>>,
}

impl ConfigStore {
    /// Loads the store from `path`.
    ///
    /// A missing or blank file starts an empty mapping — that is the normal
    /// first-run state. A present, non-blank file that fails to parse is
    /// reported as [`StoreError::Parse`] so the operator decides what to do
    /// with it; starting empty would overwrite everyone's preferences on the
    /// next snapshot tick.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] for file-system errors other than
    /// "not found" and [`StoreError::Parse`] for corrupt content.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let configs = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => HashMap::new(),
            Ok(content) => {
                serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                    path: path.clone(),
                    source,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        debug!("loaded {} persisted config(s) from {}", configs.len(), path.display());
        Ok(Self {
            path,
            configs: Mutex::new(configs),
        })
    }

    /// Creates an empty store snapshotting to `path`, ignoring any existing
    /// file content.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            configs: Mutex::new(HashMap::new()),
        }
    }

    /// The snapshot file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the config for `user_id`, falling back to the default.
    ///
    /// The fallback is *not* inserted: reads never grow the store.
    pub async fn get(&self, user_id: i64) -> UserConfig {
        self.configs
            .lock()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Replaces the stored config for `user_id`.
    pub async fn put(&self, user_id: i64, config: UserConfig) {
        self.configs.lock().await.insert(user_id, config);
    }

    /// Number of materialised entries.
    pub async fn len(&self) -> usize {
        self.configs.lock().await.len()
    }

    /// Returns a point-in-time copy of the whole mapping.
    pub async fn snapshot(&self) -> HashMap<i64, UserConfig> {
        self.configs.lock().await.clone()
    }

    /// Serializes a point-in-time snapshot and overwrites the whole file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialize`] if serialization fails and
    /// [`StoreError::Io`] if the write fails. Callers on the timer path log
    /// and retry on the next tick rather than propagate.
    pub async fn persist(&self) -> Result<(), StoreError> {
        let snapshot = self.snapshot().await;
        let content = serde_json::to_string(&snapshot).map_err(StoreError::Serialize)?;
        std::fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

/// Spawns the periodic snapshot task.
///
/// Fires unconditionally every `period` for the lifetime of the process,
/// rewriting the snapshot file whether or not anything changed. Write
/// failures are logged and retried on the next tick; they never terminate
/// the task.
pub fn spawn_snapshot_task(
    store: Arc<ConfigStore>,
    period: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        // The first tick of a tokio interval fires immediately; skip it so
        // the first real snapshot happens one full period after startup.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            match store.persist().await {
                Ok(()) => debug!("config snapshot written to {}", store.path().display()),
                Err(e) => warn!("config snapshot failed, retrying next tick: {e}"),
            }
        }
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
