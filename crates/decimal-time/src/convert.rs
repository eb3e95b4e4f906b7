use crate::types::{DecimalTime, StandardTime};

/// Standard day: 24h × 60m × 60s.
pub const STANDARD_DAY_SECONDS: f64 = 86_400.0;

/// Decimal day: 10h × 100m × 100s.
pub const DECIMAL_DAY_SECONDS: f64 = 100_000.0;

/// Decimal seconds in one decimal hour.
pub const DECIMAL_HOUR_SECONDS: f64 = 10_000.0;

/// Decimal seconds in one decimal minute.
pub const DECIMAL_MINUTE_SECONDS: f64 = 100.0;

/// Converts a standard time of day to decimal time.
///
/// Only the time-of-day fields participate; the result is exact up to f64
/// arithmetic and never rounded.
pub fn to_decimal_time(time: &StandardTime) -> DecimalTime {
    let standard_seconds = time.seconds_of_day();
    let total = standard_seconds / STANDARD_DAY_SECONDS * DECIMAL_DAY_SECONDS;

    let hours = (total / DECIMAL_HOUR_SECONDS).floor();
    let minutes = ((total % DECIMAL_HOUR_SECONDS) / DECIMAL_MINUTE_SECONDS).floor();
    let seconds = total % DECIMAL_MINUTE_SECONDS;

    DecimalTime {
        hours: hours as u32,
        minutes: minutes as u32,
        seconds,
        total_decimal_seconds: total,
        percent_of_day: total / DECIMAL_DAY_SECONDS * 100.0,
    }
}

/// Analog hand angles in degrees, clockwise from the top of the dial.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

/// Hand angles for a ten-hour dial.
///
/// Hands sweep continuously: each one carries the fractional progress of the
/// smaller units, so a hand is never quantized the way the digital readout is.
pub fn hand_angles(time: &DecimalTime) -> HandAngles {
    let hours = f64::from(time.hours);
    let minutes = f64::from(time.minutes);

    HandAngles {
        // 10 hours = 360°
        hour: (hours + minutes / 100.0 + time.seconds / 10_000.0) * 36.0,
        // 100 minutes = 360°
        minute: (minutes + time.seconds / 100.0) * 3.6,
        // 100 seconds = 360°
        second: time.seconds * 3.6,
    }
}

/// Hundredths of a decimal second, as shown after the seconds digits.
#[inline]
pub fn centiseconds(time: &DecimalTime) -> u32 {
    ((time.seconds % 1.0) * 100.0).floor() as u32
}
