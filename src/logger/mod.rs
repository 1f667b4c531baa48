//! The logging instance: one console sink, one logfile appender, and one
//! background worker bound together under a single lifecycle.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::error::Error;
use crate::fmt;
use crate::level::Level;
use crate::output::{Console, FileAppender};
use crate::worker::{Worker, WriteErrorPolicy};
use chrono::Local;
use std::path::PathBuf;
use std::sync::Arc;

/// Whether a record is written on the caller's thread or handed to the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Write inline; the call returns after console and logfile writes finish.
    Sync,
    /// Queue for the worker; the call returns as soon as the job is enqueued.
    Async,
}

/// The write path shared between synchronous callers and queued jobs —
/// everything a job needs to run after the caller has moved on.
#[derive(Debug)]
struct Core {
    console: Console,
    appender: FileAppender,
}

impl Core {
    /// Writes one record to the console and, once a path is bound, the
    /// logfile. Before `init` the file side is skipped; the console side
    /// always runs.
    fn write(&self, level: Level, stamp: &str, fields: &[String]) -> Result<(), Error> {
        let body = fields.join(" ");
        self.console.write(level, stamp, &body);

        let line = if matches!(level, Level::Empty) {
            body
        } else {
            format!("{stamp} [{}] {body}", level.tag())
        };
        match self.appender.append(&line) {
            Ok(()) | Err(Error::Unbound) => Ok(()),
            Err(err) => Err(err),
        }
    }
}

/// One logging instance: worker thread, job queue, and logfile appender.
///
/// Construction spawns the worker immediately; the instance is console-only
/// until [`Logger::init`] binds a logfile directory. Dropping the instance
/// runs [`Logger::shutdown`], so no background thread outlives its owner.
#[derive(Debug)]
pub struct Logger {
    core: Arc<Core>,
    worker: Worker,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Console-only instance with colors on and the default write-error
    /// policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(true, WriteErrorPolicy::default())
    }

    pub(crate) fn with_options(colors: bool, policy: WriteErrorPolicy) -> Self {
        Self {
            core: Arc::new(Core {
                console: Console::new(colors),
                appender: FileAppender::new(),
            }),
            worker: Worker::spawn(policy),
        }
    }

    /// Stepwise construction; see [`LoggerBuilder`].
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Binds the logfile to `directory/<init-time>.log`, creating the
    /// directory if missing. An empty `directory` is a no-op, which lets the
    /// singleton accessor be called repeatedly without re-binding the path. A
    /// second non-empty call replaces the path (last bind wins), though
    /// callers should treat the path as set-once.
    ///
    /// # Errors
    /// I/O errors resolving or creating the directory.
    pub fn init(&self, directory: &str) -> Result<(), Error> {
        if directory.is_empty() {
            return Ok(());
        }
        let dir = std::path::absolute(directory)?;
        std::fs::create_dir_all(&dir)?;
        self.core.appender.bind(dir.join(fmt::logfile_name(Local::now())));
        Ok(())
    }

    /// Currently bound logfile path; `None` before [`Logger::init`].
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        self.core.appender.path()
    }

    /// Writes one record from already-rendered fields. The timestamp is
    /// captured here, on the caller's thread, so async records carry the
    /// enqueue moment rather than the later drain moment. Use the `log_sync!`
    /// and `log_async!` macros to render heterogeneous arguments.
    ///
    /// Async records from one instance execute in strict FIFO order relative
    /// to each other; a sync record is not ordered relative to concurrently
    /// pending async records.
    ///
    /// # Errors
    /// Sync: [`Error::LogfileUnavailable`] when the bound path cannot be
    /// opened. Async: [`Error::WorkerStopped`] once shutdown has begun.
    pub fn log(&self, level: Level, dispatch: Dispatch, fields: Vec<String>) -> Result<(), Error> {
        let stamp = fmt::timestamp(Local::now());
        match dispatch {
            Dispatch::Sync => self.core.write(level, &stamp, &fields),
            Dispatch::Async => {
                let core = Arc::clone(&self.core);
                self.worker
                    .submit(Box::new(move || core.write(level, &stamp, &fields)))
            }
        }
    }

    /// Async single-message record at [`Level::Debug`].
    ///
    /// # Errors
    /// [`Error::WorkerStopped`] once shutdown has begun.
    pub fn debug(&self, msg: &str) -> Result<(), Error> {
        self.log(Level::Debug, Dispatch::Async, vec![msg.to_string()])
    }

    /// Async single-message record at [`Level::Info`].
    ///
    /// # Errors
    /// [`Error::WorkerStopped`] once shutdown has begun.
    pub fn info(&self, msg: &str) -> Result<(), Error> {
        self.log(Level::Info, Dispatch::Async, vec![msg.to_string()])
    }

    /// Async single-message record at [`Level::Warning`].
    ///
    /// # Errors
    /// [`Error::WorkerStopped`] once shutdown has begun.
    pub fn warning(&self, msg: &str) -> Result<(), Error> {
        self.log(Level::Warning, Dispatch::Async, vec![msg.to_string()])
    }

    /// Async single-message record at [`Level::Error`].
    ///
    /// # Errors
    /// [`Error::WorkerStopped`] once shutdown has begun.
    pub fn error(&self, msg: &str) -> Result<(), Error> {
        self.log(Level::Error, Dispatch::Async, vec![msg.to_string()])
    }

    /// Async single-message record at [`Level::Ok`].
    ///
    /// # Errors
    /// [`Error::WorkerStopped`] once shutdown has begun.
    pub fn ok(&self, msg: &str) -> Result<(), Error> {
        self.log(Level::Ok, Dispatch::Async, vec![msg.to_string()])
    }

    /// Closes the queue for new records, drains records already queued, and
    /// joins the worker thread. Idempotent — later calls are no-ops.
    pub fn shutdown(&self) {
        self.worker.shutdown();
    }
}
