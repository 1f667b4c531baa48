//! `echolog` - Leveled logging mirrored to the console and a per-instance
//! logfile.
//!
//! Every record carries a timestamp captured on the caller's thread and is
//! written to stdout (colorized) and appended to the instance's logfile
//! (plain), either inline on the caller's thread or on a dedicated background
//! worker:
//! - Sync dispatch returns after both writes are durably done
//! - Async dispatch queues the record and returns immediately; records drain
//!   in FIFO order
//! - One worker thread, one job queue, and one logfile per instance
//! - A process-wide singleton or arbitrarily many independent instances
//!
//! # Example
//!
//! ```no_run
//! use echolog::{Level, Logger, log_async, log_sync};
//!
//! # fn main() -> Result<(), echolog::Error> {
//! let logger = Logger::builder().directory("logs").build()?;
//!
//! log_sync!(logger, Level::Info, "service started on port", 8080)?;
//! log_async!(logger, Level::Ok, "handshake complete")?;
//!
//! logger.shutdown();
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod fmt;
pub mod level;
pub mod logger;
pub mod output;
pub mod registry;
pub mod worker;

pub use config::Config;
pub use error::Error;
pub use fmt::{LogValue, Point};
pub use level::Level;
pub use logger::{Dispatch, Logger, LoggerBuilder};
pub use output::FileAppender;
pub use worker::WriteErrorPolicy;

/// Renders each argument via [`LogValue`] and writes the record inline on the
/// caller's thread, returning once console and logfile writes are complete.
#[macro_export]
macro_rules! log_sync {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        ($logger).log(
            $level,
            $crate::Dispatch::Sync,
            vec![$($crate::LogValue::render(&$arg)),*],
        )
    };
}

/// Renders each argument via [`LogValue`], captures the timestamp, and hands
/// the record to the instance's worker, returning as soon as it is queued.
#[macro_export]
macro_rules! log_async {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        ($logger).log(
            $level,
            $crate::Dispatch::Async,
            vec![$($crate::LogValue::render(&$arg)),*],
        )
    };
}
