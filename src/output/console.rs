//! Console sink with optional ANSI-colored level tags.

use crate::level::Level;
use std::io::{self, Write};

/// Writes records to stdout. Piped output and CI environments can't render
/// ANSI escape codes, so coloring is a toggle.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    colors_enabled: bool,
}

impl Console {
    #[must_use]
    pub const fn new(colors_enabled: bool) -> Self {
        Self { colors_enabled }
    }

    /// Writes one record line. `Empty` gets the message body alone; every
    /// other level gets the timestamp/tag prefix. Console write failures are
    /// ignored — the logfile is the durable sink.
    pub fn write(&self, level: Level, stamp: &str, body: &str) {
        let mut out = io::stdout().lock();
        if matches!(level, Level::Empty) {
            let _ = writeln!(out, "{body}");
        } else {
            let tag = if self.colors_enabled {
                level.tag_colored()
            } else {
                level.tag()
            };
            let _ = writeln!(out, "{stamp} [{tag}] {body}");
        }
    }
}
