//! Timestamp rendering and the render-to-text contract for log arguments.

mod stamp;
mod value;

pub use stamp::{logfile_name, timestamp};
pub use value::{LogValue, Point};
