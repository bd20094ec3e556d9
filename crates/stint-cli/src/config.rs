//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the session log document.
    pub log_path: PathBuf,
    /// Play a sound when a session is stopped.
    pub play_sound: bool,
    /// External command to run for the stop sound. When unset, a terminal
    /// bell is used instead.
    pub sound_command: Option<String>,
    /// Capture annotation text given after `stop` into the log entry.
    pub capture_annotation: bool,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            log_path: data_dir.join("Time Tracker.md"),
            play_sound: true,
            sound_command: None,
            capture_annotation: true,
        }
    }
}

impl Config {
    /// Loads configuration from default locations.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from a specific file.
    ///
    /// Layering, later sources winning: built-in defaults, then
    /// `config.toml` in the platform config directory, then the explicit
    /// file, then `STINT_*` environment variables.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("STINT_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for stint.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("stint"))
}

/// Returns the platform-specific data directory for stint.
///
/// On Linux: `~/.local/share/stint`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("stint"))
}
