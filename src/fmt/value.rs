//! A closed "renderable to text" contract for heterogeneous log arguments,
//! dispatched at compile time through the `log_sync!`/`log_async!` macros.

/// Capability to render a value as one textual log field.
pub trait LogValue {
    /// Textual representation written to console and logfile.
    fn render(&self) -> String;
}

impl<T: LogValue + ?Sized> LogValue for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl LogValue for str {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl LogValue for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl LogValue for bool {
    fn render(&self) -> String {
        (if *self { "true" } else { "false" }).to_string()
    }
}

macro_rules! display_log_value {
    ($($t:ty),* $(,)?) => {
        $(impl LogValue for $t {
            fn render(&self) -> String {
                self.to_string()
            }
        })*
    };
}

display_log_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char,
);

/// Point-like loggable value, rendered as `{x; y}`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl LogValue for Point {
    fn render(&self) -> String {
        format!("{{{}; {}}}", self.x, self.y)
    }
}
