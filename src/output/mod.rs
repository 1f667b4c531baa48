//! The two sinks every record is mirrored to: the console stream and the
//! per-instance logfile.

mod console;
mod file;

pub use console::Console;
pub use file::FileAppender;
