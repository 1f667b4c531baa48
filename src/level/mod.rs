//! Severity levels and their fixed console/file tag tokens.

use std::fmt;

/// Severity/category of one record. Closed set: every rendering path matches
/// all six variants explicitly so no level can silently drop output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Raw passthrough — no timestamp or tag prefix. Exists for blank lines
    /// and preformatted output.
    Empty,
    /// Development-time diagnostics.
    Debug,
    /// Normal operational milestones.
    Info,
    /// Non-fatal anomalies that may need attention.
    Warning,
    /// Failures that prevent the operation from completing.
    Error,
    /// Explicit success confirmations.
    Ok,
}

impl Level {
    /// Lowercase name for diagnostics and config strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Ok => "ok",
        }
    }

    /// Fixed six-character token so the tag column stays aligned across
    /// levels. `Empty` carries no tag at all.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Debug => " DEBG ",
            Self::Info => " INFO ",
            Self::Warning => " WARN ",
            Self::Error => " FAIL ",
            Self::Ok => "  OK  ",
        }
    }

    /// The same token wrapped in a 4-bit ANSI color for terminal output.
    #[must_use]
    pub const fn tag_colored(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Debug => "\x1b[35m DEBG \x1b[0m",
            Self::Info => "\x1b[37m INFO \x1b[0m",
            Self::Warning => "\x1b[33m WARN \x1b[0m",
            Self::Error => "\x1b[31m FAIL \x1b[0m",
            Self::Ok => "\x1b[32m  OK  \x1b[0m",
        }
    }

    /// Convenience for iteration — used by tests and diagnostics.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Empty,
            Self::Debug,
            Self::Info,
            Self::Warning,
            Self::Error,
            Self::Ok,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
