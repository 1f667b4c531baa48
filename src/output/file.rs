//! Mutex-guarded append-only logfile writer.

use crate::error::Error;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One logfile per instance. The path is bound once by `init`; the mutex
/// serializes every writer on the instance — the worker thread and any thread
/// making a synchronous call — so lines are never interleaved byte-for-byte.
#[derive(Debug, Default)]
pub struct FileAppender {
    path: Mutex<Option<PathBuf>>,
}

impl FileAppender {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the logfile path. A later bind replaces the earlier one; callers
    /// are expected to treat the path as set-once per instance.
    pub fn bind(&self, path: PathBuf) {
        *self.lock() = Some(path);
    }

    /// Currently bound path; `None` before the first bind.
    #[must_use]
    pub fn path(&self) -> Option<PathBuf> {
        self.lock().clone()
    }

    /// Appends one rendered line. Each call is a fresh open/write/flush/close
    /// cycle so an externally rotated or truncated file never wedges the
    /// writer.
    ///
    /// # Errors
    /// [`Error::Unbound`] before any path is bound; [`Error::LogfileUnavailable`]
    /// when the file cannot be opened at the bound path.
    pub fn append(&self, line: &str) -> Result<(), Error> {
        let guard = self.lock();
        let Some(path) = guard.as_ref() else {
            return Err(Error::Unbound);
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| Error::LogfileUnavailable {
                path: path.clone(),
                source,
            })?;
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()?;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Option<PathBuf>> {
        // A panicked writer must not take logging down with it.
        self.path.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
