//! French Revolutionary **decimal time**: 10 hours a day, 100 minutes an
//! hour, 100 seconds a minute.
//!
//! This crate is intentionally dependency-free: it holds the pure conversion
//! math so the ticker, theme and rendering layers can share one definition.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | `StandardTime`, `DecimalTime` |
//! | [`convert`] | `to_decimal_time`, `hand_angles`, `centiseconds` |
//! | [`format`] | `format_standard_time`, `format_decimal_time`, `format_percent_of_day` |
//! | [`parser`] | `parse_standard_time` |
//! | [`error`] | `TimeError` |
//!
//! # Quick start
//!
//! ```rust
//! use decimal_time::{parse_standard_time, to_decimal_time, format_decimal_time};
//!
//! let noon = parse_standard_time("12:00").unwrap();
//! let decimal = to_decimal_time(&noon);
//! assert_eq!(format_decimal_time(&decimal), "5:00:00");
//! assert_eq!(decimal.percent_of_day, 50.0);
//! ```

pub mod convert;
pub mod error;
pub mod format;
pub mod parser;
pub mod types;

pub use convert::{
    centiseconds, hand_angles, to_decimal_time, HandAngles, DECIMAL_DAY_SECONDS,
    STANDARD_DAY_SECONDS,
};
pub use error::TimeError;
pub use format::{format_decimal_time, format_percent_of_day, format_standard_time};
pub use parser::parse_standard_time;
pub use types::{DecimalTime, StandardTime};

#[cfg(test)]
mod convert_tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> DecimalTime {
        to_decimal_time(&StandardTime::new(h, m, s, ms).unwrap())
    }

    fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

    #[test]
    fn midnight_is_zero() {
        let d = at(0, 0, 0, 0);
        assert_eq!(d, DecimalTime::default());
    }

    #[test]
    fn midday_is_half() {
        let d = at(12, 0, 0, 0);
        assert_eq!(d.hours, 5);
        assert_eq!(d.minutes, 0);
        assert!(close(d.seconds, 0.0));
        assert!(close(d.total_decimal_seconds, 50_000.0));
        assert!(close(d.percent_of_day, 50.0));
    }

    #[test]
    fn last_millisecond_of_day() {
        let d = at(23, 59, 59, 999);
        assert_eq!(d.hours, 9);
        assert_eq!(d.minutes, 99);
        assert!(d.total_decimal_seconds > 99_999.99 && d.total_decimal_seconds < 100_000.0);
        assert!(d.seconds > 99.99 && d.seconds < 100.0);
        assert!(d.percent_of_day > 99.99999 && d.percent_of_day < 100.0);
    }

    #[test]
    fn quarter_day() {
        let d = at(6, 0, 0, 0);
        assert_eq!((d.hours, d.minutes), (2, 50));
        assert_eq!(format_decimal_time(&d), "2:50:00");
    }

    #[test]
    fn one_standard_second_is_longer_than_a_decimal_one() {
        let d = at(0, 0, 1, 0);
        assert!(close(d.seconds, 100_000.0 / 86_400.0));
        assert_eq!(d.whole_seconds(), 1);
        assert_eq!(centiseconds(&d), 15);
    }

    #[test]
    fn standard_format_pads_every_field() {
        let t = StandardTime { hours: 3, minutes: 5, seconds: 9, milliseconds: 0 };
        assert_eq!(format_standard_time(&t), "03:05:09");
        assert_eq!(t.to_string(), "03:05:09");
    }

    #[test]
    fn decimal_format_leaves_hour_unpadded() {
        let d = at(21, 36, 0, 0);
        assert_eq!(d.hours, 9);
        assert_eq!(d.to_string(), "9:00:00");
        assert_eq!(format_percent_of_day(&d), "90.00%");
    }

    #[test]
    fn hands_at_midday_point_down() {
        let angles = hand_angles(&at(12, 0, 0, 0));
        assert!(close(angles.hour, 180.0));
        assert!(close(angles.minute, 0.0));
        assert!(close(angles.second, 0.0));
    }

    #[test]
    fn hands_keep_fractional_seconds() {
        let d = at(0, 0, 1, 0);
        let angles = hand_angles(&d);
        assert!(close(angles.second, d.seconds * 3.6));
        assert!(angles.second > f64::from(d.whole_seconds()) * 3.6);
    }
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> StandardTime { parse_standard_time(src).unwrap() }
    fn err_col(src: &str) -> usize { parse_standard_time(src).unwrap_err().col }

    #[test] fn hours_and_minutes() { assert_eq!(ok("12:00"), StandardTime::new(12, 0, 0, 0).unwrap()); }
    #[test] fn full_precision() { assert_eq!(ok("23:59:59.999"), StandardTime::new(23, 59, 59, 999).unwrap()); }
    #[test] fn single_digit_fields() { assert_eq!(ok("7:5:9"), StandardTime::new(7, 5, 9, 0).unwrap()); }
    #[test] fn short_fraction_scales() { assert_eq!(ok("00:00:01.25").milliseconds, 250); }
    #[test] fn surrounding_whitespace() { assert_eq!(ok("  08:30 ").hours, 8); }

    #[test] fn err_hour_out_of_range() { assert_eq!(err_col("24:00"), 1); }
    #[test] fn err_minute_out_of_range() { assert_eq!(err_col("12:60"), 4); }
    #[test] fn err_wrong_separator() { assert_eq!(err_col("12-00"), 3); }
    #[test] fn err_missing_minutes() { assert_eq!(err_col("12:"), 4); }
    #[test] fn err_empty_fraction() { assert_eq!(err_col("12:00:00."), 10); }
    #[test] fn err_trailing_garbage() { assert_eq!(err_col("12:00 pm"), 7); }
    #[test] fn err_four_digit_fraction() { assert_eq!(err_col("12:00:00.1234"), 13); }

    #[test]
    fn constructor_rejects_out_of_range() {
        let e = StandardTime::new(0, 60, 0, 0).unwrap_err();
        assert_eq!(e.col, 0);
        assert!(e.to_string().contains("minutes 60"));
    }
}
