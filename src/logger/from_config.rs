//! Bridge from loaded configuration to a running instance.

use super::Logger;
use crate::config::Config;
use crate::error::Error;

impl Logger {
    /// Builds an instance from a loaded [`Config`], binding the configured
    /// (or platform default) logfile directory.
    ///
    /// # Errors
    /// Unknown policy names and directory binding failures.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::builder()
            .colors(config.colors)
            .on_write_error(config.write_error_policy()?)
            .directory(config.resolve_directory())
            .build()
    }
}
