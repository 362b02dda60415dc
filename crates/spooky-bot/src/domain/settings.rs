//! Runtime settings: bot credentials and operational knobs.
//!
//! Credentials arrive in a Java-style properties file (`token` and `name`,
//! one `key=value` per line) for compatibility with existing deployments.
//! Everything else — snapshot path, snapshot cadence, long-poll timeout — is
//! assembled from CLI arguments in `main.rs` and carried in [`BotSettings`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// Error type for settings and credentials loading.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The properties file could not be read.
    #[error("I/O error reading properties at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required property is absent from the file.
    #[error("missing required property '{0}'")]
    MissingProperty(&'static str),
}

/// Telegram bot identity: API token plus the public `@name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotCredentials {
    /// Bot API token issued by BotFather.
    pub token: String,
    /// Bot username, without the leading `@`. Used to detect mentions.
    pub name: String,
}

/// All runtime configuration for the bot process.
#[derive(Debug, Clone)]
pub struct BotSettings {
    pub credentials: BotCredentials,
    /// Where the durable config snapshot lives.
    pub snapshot_path: PathBuf,
    /// Cadence of the unconditional snapshot cycle.
    pub snapshot_interval: Duration,
    /// Long-poll timeout passed to the platform's update endpoint.
    pub poll_timeout: Duration,
}

/// Loads `token` and `name` from a Java-style properties file.
///
/// Supported syntax is the subset the bot has always used: `key=value` lines,
/// blank lines, and comments starting with `#` or `!`. Keys and values are
/// trimmed. Later occurrences of a key override earlier ones.
///
/// # Errors
///
/// Returns [`SettingsError::Io`] if the file cannot be read and
/// [`SettingsError::MissingProperty`] if `token` or `name` is absent.
pub fn load_properties(path: &Path) -> Result<BotCredentials, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut token = None;
    let mut name = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            match key.trim() {
                "token" => token = Some(value.trim().to_string()),
                "name" => name = Some(value.trim().to_string()),
                _ => {}
            }
        }
    }

    Ok(BotCredentials {
        token: token.ok_or(SettingsError::MissingProperty("token"))?,
        name: name.ok_or(SettingsError::MissingProperty("name"))?,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_properties(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn test_loads_token_and_name() {
        let file = write_properties("token=123:abc\nname=spooky_text_bot\n");

        let creds = load_properties(file.path()).unwrap();

        assert_eq!(creds.token, "123:abc");
        assert_eq!(creds.name, "spooky_text_bot");
    }

    #[test]
    fn test_ignores_comments_blank_lines_and_unknown_keys() {
        let file = write_properties(
            "# bot credentials\n\n! legacy comment\nowner=someone\ntoken = 123:abc \nname= spooky_text_bot\n",
        );

        let creds = load_properties(file.path()).unwrap();

        assert_eq!(creds.token, "123:abc");
        assert_eq!(creds.name, "spooky_text_bot");
    }

    #[test]
    fn test_later_keys_override_earlier_ones() {
        let file = write_properties("token=old\ntoken=new\nname=bot\n");
        let creds = load_properties(file.path()).unwrap();
        assert_eq!(creds.token, "new");
    }

    #[test]
    fn test_missing_token_is_an_error() {
        let file = write_properties("name=bot\n");
        let err = load_properties(file.path()).unwrap_err();
        assert!(matches!(err, SettingsError::MissingProperty("token")));
    }

    #[test]
    fn test_missing_name_is_an_error() {
        let file = write_properties("token=123:abc\n");
        let err = load_properties(file.path()).unwrap_err();
        assert!(matches!(err, SettingsError::MissingProperty("name")));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = load_properties(Path::new("/nonexistent/bot.properties")).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn test_value_may_contain_equals_signs() {
        // Telegram tokens can contain arbitrary characters; only the first
        // '=' separates key from value.
        let file = write_properties("token=abc=def\nname=bot\n");
        let creds = load_properties(file.path()).unwrap();
        assert_eq!(creds.token, "abc=def");
    }
}
