use std::fmt;

/// A time-of-day parse or range error.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeError {
    pub message: String,
    /// 1-based column of the offending character. `0` when the error is not
    /// tied to a position in source text (e.g. a field passed out of range).
    pub col: usize,
}

impl TimeError {
    pub(crate) fn new(msg: impl Into<String>, col: usize) -> Self {
        Self { message: msg.into(), col }
    }

    pub(crate) fn out_of_range(field: &str, value: u32, max: u32) -> Self {
        Self::new(format!("{field} {value} out of range 0..={max}"), 0)
    }
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.col == 0 {
            write!(f, "invalid time of day: {}", self.message)
        } else {
            write!(f, "invalid time of day at column {}: {}", self.col, self.message)
        }
    }
}

impl std::error::Error for TimeError {}
