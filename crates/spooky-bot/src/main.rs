//! Spooky Text Bot — entry point.
//!
//! Wires the pieces together and runs until Ctrl-C:
//!
//! ```text
//! main()
//!  └─ load credentials (properties file)
//!  └─ ConfigStore::load        -- known_configs.json, fail fast if corrupt
//!  └─ spawn_snapshot_task      -- rewrites the file every 15 s
//!  └─ run_dispatcher           -- long-polls Telegram, one event at a time
//! ```
//!
//! # Usage
//!
//! ```text
//! spooky-bot <PROPERTIES_FILE> [OPTIONS]
//!
//! Options:
//!   --snapshot-path <PATH>        Durable config file [default: known_configs.json]
//!   --snapshot-interval-secs <N>  Snapshot cadence [default: 15]
//!   --poll-timeout-secs <N>       getUpdates long-poll timeout [default: 30]
//! ```
//!
//! Defaults can also be overridden with `SPOOKY_SNAPSHOT_PATH`,
//! `SPOOKY_SNAPSHOT_INTERVAL` and `SPOOKY_POLL_TIMEOUT`; CLI args take
//! precedence. The properties file provides `token` and `name`.

use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use spooky_bot::application::{run_dispatcher, HandleUpdateUseCase};
use spooky_bot::domain::settings::{load_properties, BotSettings};
use spooky_bot::infrastructure::storage::{spawn_snapshot_task, ConfigStore};
use spooky_bot::infrastructure::telegram::TelegramApi;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Telegram bot that spookifies text with per-user configurable intensity.
#[derive(Debug, Parser)]
#[command(name = "spooky-bot", about = "Spooky Text Bot for Telegram", version)]
struct Cli {
    /// Path to the credentials properties file providing `token` and `name`.
    properties: PathBuf,

    /// Path of the durable per-user config snapshot.
    #[arg(long, default_value = "known_configs.json", env = "SPOOKY_SNAPSHOT_PATH")]
    snapshot_path: PathBuf,

    /// Seconds between unconditional config snapshots.
    #[arg(long, default_value_t = 15, env = "SPOOKY_SNAPSHOT_INTERVAL")]
    snapshot_interval_secs: u64,

    /// Long-poll timeout in seconds passed to `getUpdates`.
    #[arg(long, default_value_t = 30, env = "SPOOKY_POLL_TIMEOUT")]
    poll_timeout_secs: u64,
}

impl Cli {
    /// Reads the credentials file and assembles the full runtime settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the properties file cannot be read or is missing
    /// `token` or `name`.
    fn into_settings(self) -> anyhow::Result<BotSettings> {
        let credentials = load_properties(&self.properties)
            .with_context(|| format!("loading credentials from {}", self.properties.display()))?;

        Ok(BotSettings {
            credentials,
            snapshot_path: self.snapshot_path,
            snapshot_interval: Duration::from_secs(self.snapshot_interval_secs),
            poll_timeout: Duration::from_secs(self.poll_timeout_secs),
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging. Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Cli::parse().into_settings()?;
    info!("Spooky Text Bot starting as @{}", settings.credentials.name);

    // A corrupt snapshot fails here, before anything could overwrite it.
    let store = Arc::new(
        ConfigStore::load(&settings.snapshot_path).with_context(|| {
            format!(
                "loading persisted configs from {}",
                settings.snapshot_path.display()
            )
        })?,
    );
    info!(
        "{} persisted config(s) loaded from {}",
        store.len().await,
        settings.snapshot_path.display()
    );

    let snapshot_task = spawn_snapshot_task(Arc::clone(&store), settings.snapshot_interval);

    // Shutdown flag, cleared by Ctrl-C (SIGINT).
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            running_clone.store(false, Ordering::Relaxed);
        }
    });

    let mut transport = TelegramApi::new(&settings.credentials, settings.poll_timeout)?;
    let use_case = HandleUpdateUseCase::new(Arc::clone(&store));

    run_dispatcher(&mut transport, &use_case, running).await;

    // One final snapshot so commands handled since the last tick survive.
    snapshot_task.abort();
    if let Err(e) = store.persist().await {
        tracing::warn!("final config snapshot failed: {e}");
    }

    info!("Spooky Text Bot stopped");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["spooky-bot", "bot.properties"]);
        assert_eq!(cli.properties, PathBuf::from("bot.properties"));
        assert_eq!(cli.snapshot_path, PathBuf::from("known_configs.json"));
        assert_eq!(cli.snapshot_interval_secs, 15);
        assert_eq!(cli.poll_timeout_secs, 30);
    }

    #[test]
    fn test_cli_snapshot_path_override() {
        let cli = Cli::parse_from([
            "spooky-bot",
            "bot.properties",
            "--snapshot-path",
            "/var/lib/spooky/configs.json",
        ]);
        assert_eq!(cli.snapshot_path, PathBuf::from("/var/lib/spooky/configs.json"));
    }

    #[test]
    fn test_cli_interval_and_timeout_overrides() {
        let cli = Cli::parse_from([
            "spooky-bot",
            "bot.properties",
            "--snapshot-interval-secs",
            "60",
            "--poll-timeout-secs",
            "5",
        ]);
        assert_eq!(cli.snapshot_interval_secs, 60);
        assert_eq!(cli.poll_timeout_secs, 5);
    }

    #[test]
    fn test_cli_requires_the_properties_argument() {
        assert!(Cli::try_parse_from(["spooky-bot"]).is_err());
    }

    #[test]
    fn test_into_settings_reads_credentials_and_durations() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"token=123:abc\nname=spooky_text_bot\n").unwrap();

        let cli = Cli::parse_from([
            "spooky-bot",
            file.path().to_str().unwrap(),
            "--snapshot-interval-secs",
            "20",
        ]);
        let settings = cli.into_settings().unwrap();

        assert_eq!(settings.credentials.token, "123:abc");
        assert_eq!(settings.credentials.name, "spooky_text_bot");
        assert_eq!(settings.snapshot_interval, Duration::from_secs(20));
        assert_eq!(settings.poll_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_into_settings_missing_properties_file_is_an_error() {
        let cli = Cli::parse_from(["spooky-bot", "/nonexistent/bot.properties"]);
        assert!(cli.into_settings().is_err());
    }
}
