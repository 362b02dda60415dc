//! Infrastructure layer for spooky-bot.
//!
//! All I/O lives here: the durable config snapshot file and the Telegram
//! Bot API client. Update-handling decisions stay in the application layer;
//! this layer only persists state and moves bytes.

pub mod storage;
pub mod telegram;

pub use storage::{spawn_snapshot_task, ConfigStore, StoreError};
pub use telegram::TelegramApi;
