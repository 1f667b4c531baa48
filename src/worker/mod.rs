//! Per-instance background worker and its job queue.

use crate::error::Error;
use std::str::FromStr;
use std::sync::mpsc::{self, Sender};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

/// One queued unit of rendering-and-writing work. Everything the job needs is
/// captured by value at enqueue time; it is consumed exactly once.
pub type Job = Box<dyn FnOnce() -> Result<(), Error> + Send + 'static>;

/// What the worker does with a job that fails (typically a logfile open
/// failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteErrorPolicy {
    /// Surface the failure on stderr, including the attempted path, and keep
    /// the worker alive.
    #[default]
    Report,
    /// Drop the failure. The record still reached the console inside the job.
    Ignore,
}

impl FromStr for WriteErrorPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "report" => Ok(Self::Report),
            "ignore" => Ok(Self::Ignore),
            _ => Err(Error::InvalidPolicy(s.to_string())),
        }
    }
}

/// Dedicated consumer thread draining a FIFO job queue.
///
/// The channel doubles as queue and wake signal: the thread blocks in `recv`
/// while the queue is empty, and dropping the sender is the single shutdown
/// signal. Jobs already queued at that point always drain before the thread
/// exits; jobs submitted afterwards are rejected. Execution is strictly
/// serial, one job at a time.
#[derive(Debug)]
pub struct Worker {
    tx: Mutex<Option<Sender<Job>>>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Worker {
    /// Spawns the consumer thread. A failed job never terminates the loop; it
    /// is handled according to `policy`.
    #[must_use]
    pub fn spawn(policy: WriteErrorPolicy) -> Self {
        let (tx, rx) = mpsc::channel::<Job>();
        let handle = thread::spawn(move || {
            while let Ok(job) = rx.recv() {
                if let Err(err) = job()
                    && policy == WriteErrorPolicy::Report
                {
                    eprintln!("echolog: {err}");
                }
            }
        });
        Self {
            tx: Mutex::new(Some(tx)),
            handle: Mutex::new(Some(handle)),
        }
    }

    /// Queues a job for the consumer thread, in submission order. Never blocks
    /// the producer beyond the brief sender lock.
    ///
    /// # Errors
    /// [`Error::WorkerStopped`] once shutdown has begun.
    pub fn submit(&self, job: Job) -> Result<(), Error> {
        let guard = lock(&self.tx);
        guard
            .as_ref()
            .ok_or(Error::WorkerStopped)?
            .send(job)
            .map_err(|_| Error::WorkerStopped)
    }

    /// Closes the queue, lets already-queued jobs drain, and joins the
    /// consumer thread. Idempotent: later calls find nothing left to close or
    /// join.
    pub fn shutdown(&self) {
        drop(lock(&self.tx).take());
        let handle = lock(&self.handle).take();
        if let Some(handle) = handle {
            let _ = handle.join();
        }
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
