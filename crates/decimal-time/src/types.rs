use crate::error::TimeError;

/// Conventional wall-clock time of day.
///
/// A plain projection of the host clock's local time. Fields are public for
/// read access; [`StandardTime::new`] is the validating constructor.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct StandardTime {
    /// 0–23
    pub hours: u32,
    /// 0–59
    pub minutes: u32,
    /// 0–59
    pub seconds: u32,
    /// 0–999
    pub milliseconds: u32,
}

impl StandardTime {
    pub const MIDNIGHT: StandardTime = StandardTime { hours: 0, minutes: 0, seconds: 0, milliseconds: 0 };

    /// Builds a time of day, rejecting out-of-range fields.
    pub fn new(hours: u32, minutes: u32, seconds: u32, milliseconds: u32) -> Result<Self, TimeError> {
        if hours > 23 {
            return Err(TimeError::out_of_range("hours", hours, 23));
        }
        if minutes > 59 {
            return Err(TimeError::out_of_range("minutes", minutes, 59));
        }
        if seconds > 59 {
            return Err(TimeError::out_of_range("seconds", seconds, 59));
        }
        if milliseconds > 999 {
            return Err(TimeError::out_of_range("milliseconds", milliseconds, 999));
        }
        Ok(Self { hours, minutes, seconds, milliseconds })
    }

    /// Seconds elapsed since local midnight, in `[0, 86400)`.
    #[inline]
    pub fn seconds_of_day(self) -> f64 {
        f64::from(self.hours) * 3600.0
            + f64::from(self.minutes) * 60.0
            + f64::from(self.seconds)
            + f64::from(self.milliseconds) / 1000.0
    }

    /// Milliseconds elapsed since local midnight.
    #[inline]
    pub fn millis_of_day(self) -> u32 {
        ((self.hours * 60 + self.minutes) * 60 + self.seconds) * 1000 + self.milliseconds
    }
}

/// French Revolutionary decimal time of day.
///
/// Invariants:
/// - `hours * 10000 + minutes * 100 + seconds == total_decimal_seconds`
///   (within floating-point tolerance)
/// - `percent_of_day == total_decimal_seconds / 1000`
///
/// `seconds` keeps its fractional part. Display code decides how to truncate.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DecimalTime {
    /// 0–9
    pub hours: u32,
    /// 0–99
    pub minutes: u32,
    /// `[0, 100)`
    pub seconds: f64,
    /// `[0, 100000)`
    pub total_decimal_seconds: f64,
    /// `[0, 100)`
    pub percent_of_day: f64,
}

impl DecimalTime {
    /// Whole decimal seconds, as shown on a digital readout.
    #[inline]
    pub fn whole_seconds(self) -> u32 {
        self.seconds.floor() as u32
    }
}
