//! Unified error type for all echolog operations.

use std::path::PathBuf;

/// Error type for echolog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// The logfile could not be opened at the bound path.
    LogfileUnavailable {
        /// Path the appender tried to open.
        path: PathBuf,
        /// Underlying open failure.
        source: std::io::Error,
    },
    /// File write attempted before a path was bound via `init`.
    Unbound,
    /// Async record submitted after shutdown began.
    WorkerStopped,
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Unknown write-error policy name.
    InvalidPolicy(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::LogfileUnavailable { path, source } => write!(
                f,
                "error opening logfile (logfile path: {}): {source}",
                path.display()
            ),
            Self::Unbound => write!(f, "no logfile path bound; call init first"),
            Self::WorkerStopped => write!(f, "worker already shut down; record dropped"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidPolicy(name) => write!(f, "unknown write-error policy: {name}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::LogfileUnavailable { source, .. } => Some(source),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
