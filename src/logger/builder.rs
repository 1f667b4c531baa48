//! Stepwise construction so callers don't assemble console, appender, and
//! worker by hand.

use super::Logger;
use crate::error::Error;
use crate::worker::WriteErrorPolicy;

/// Builder for [`Logger`].
#[derive(Debug)]
pub struct LoggerBuilder {
    directory: Option<String>,
    colors: bool,
    policy: WriteErrorPolicy,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Colors on, failures reported, no directory bound.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            directory: None,
            colors: true,
            policy: WriteErrorPolicy::Report,
        }
    }

    /// Logfile directory to bind at build time. Skipping it leaves the
    /// instance console-only until [`Logger::init`].
    #[must_use]
    pub fn directory(mut self, dir: impl Into<String>) -> Self {
        self.directory = Some(dir.into());
        self
    }

    /// Piped output and CI environments can't render ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    /// What the worker does when an async file write fails.
    #[must_use]
    pub const fn on_write_error(mut self, policy: WriteErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Spawns the worker and, when a directory was given, binds the logfile.
    ///
    /// # Errors
    /// I/O errors from binding the directory.
    pub fn build(self) -> Result<Logger, Error> {
        let logger = Logger::with_options(self.colors, self.policy);
        if let Some(dir) = self.directory {
            logger.init(&dir)?;
        }
        Ok(logger)
    }
}
