use std::fmt;

use crate::types::{DecimalTime, StandardTime};

/// `"HH:MM:SS"`, every field zero-padded to two digits.
pub fn format_standard_time(time: &StandardTime) -> String {
    format!("{:02}:{:02}:{:02}", time.hours, time.minutes, time.seconds)
}

/// `"H:MM:SS"`: the single decimal-hour digit is left unpadded; minutes and
/// seconds are floored and zero-padded.
pub fn format_decimal_time(time: &DecimalTime) -> String {
    format!("{}:{:02}:{:02}", time.hours, time.minutes, time.whole_seconds())
}

/// Day progress with two decimals, e.g. `"50.00%"`.
pub fn format_percent_of_day(time: &DecimalTime) -> String {
    format!("{:.2}%", time.percent_of_day)
}

impl fmt::Display for StandardTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_standard_time(self))
    }
}

impl fmt::Display for DecimalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_decimal_time(self))
    }
}
