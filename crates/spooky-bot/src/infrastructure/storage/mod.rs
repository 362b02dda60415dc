//! Durable per-user configuration storage.
//!
//! See [`configs`] for the store itself and the periodic snapshot task.

pub mod configs;

pub use configs::{spawn_snapshot_task, ConfigStore, StoreError};
