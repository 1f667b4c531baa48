//! TOML-backed configuration loaded from the platform config directory.

use crate::error::Error;
use crate::worker::WriteErrorPolicy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for one logger instance, loadable from `config.toml` in the
/// platform config directory. Missing fields fall back to defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logfile directory; when absent the platform state/data dir is used.
    pub directory: Option<String>,
    /// ANSI colors on the console stream.
    pub colors: bool,
    /// `"report"` or `"ignore"` — what the worker does with failed file
    /// writes.
    pub on_write_error: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: None,
            colors: true,
            on_write_error: "report".to_string(),
        }
    }
}

impl Config {
    /// Loads `config.toml` from the platform config directory.
    ///
    /// # Errors
    /// [`Error::ConfigDirNotFound`] when the platform has no config dir; I/O
    /// and TOML parse errors otherwise.
    pub fn load() -> Result<Self, Error> {
        let path = Self::config_path().ok_or(Error::ConfigDirNotFound)?;
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit file path.
    ///
    /// # Errors
    /// I/O and TOML parse errors.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "echolog")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Parsed write-error policy.
    ///
    /// # Errors
    /// [`Error::InvalidPolicy`] for unknown policy names.
    pub fn write_error_policy(&self) -> Result<WriteErrorPolicy, Error> {
        self.on_write_error.parse()
    }

    /// Logfile directory, falling back to the platform state dir (or data dir
    /// where the platform has none).
    #[must_use]
    pub fn resolve_directory(&self) -> String {
        self.directory.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("", "", "echolog").map_or_else(
                || "logs".to_string(),
                |dirs| {
                    dirs.state_dir()
                        .unwrap_or_else(|| dirs.data_dir())
                        .join("logs")
                        .to_string_lossy()
                        .into_owned()
                },
            )
        })
    }
}
