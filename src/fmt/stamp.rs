//! Time-derived strings: the per-record timestamp and the generated logfile name.

use chrono::{DateTime, Local};

/// Record timestamp, millisecond resolution. Captured on the caller's thread
/// at enqueue time so async records carry the enqueue moment.
#[must_use]
pub fn timestamp(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}

/// Logfile name embedding the init moment, unique per bind within one-second
/// resolution.
#[must_use]
pub fn logfile_name(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%d_%H-%M-%S.log").to_string()
}
