//! Process-wide singleton and independent instance construction.
//!
//! The singleton is an explicit `OnceLock` static so it is constructed
//! exactly once even when multiple threads race the first access. It lives
//! for the process lifetime; its worker is never joined.

use crate::error::Error;
use crate::logger::Logger;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Process-wide singleton, lazily constructed console-only on first access. A
/// non-empty `directory` is forwarded to [`Logger::init`]; pass `""` to reach
/// the instance without touching the bound path.
///
/// # Errors
/// Directory binding failures. The singleton itself is still constructed.
pub fn get(directory: &str) -> Result<&'static Logger, Error> {
    let logger = GLOBAL.get_or_init(Logger::new);
    logger.init(directory)?;
    Ok(logger)
}

/// Independently owned instance, unrelated to the singleton. Shut down when
/// dropped. Prefer a directory different from the singleton's; nothing
/// enforces it.
///
/// # Errors
/// Directory binding failures.
pub fn create(directory: &str) -> Result<Logger, Error> {
    let logger = Logger::new();
    logger.init(directory)?;
    Ok(logger)
}
