use chrono::{Local, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use parking_lot::Mutex;

use decimal_time::{DecimalTime, StandardTime};

/// Source of local wall-clock instants.
///
/// The ticker samples this once per refresh. Implementations must be cheap
/// and must not block.
pub trait HostClock: Send + Sync + 'static {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the operating system's local time.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl HostClock for SystemClock {
    #[inline]
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
///
/// Used to render a fixed instant and to drive the ticker deterministically.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self { now: Mutex::new(at) }
    }

    pub fn set(&self, at: NaiveDateTime) {
        *self.now.lock() = at;
    }

    pub fn advance(&self, by: TimeDelta) {
        let mut now = self.now.lock();
        *now = *now + by;
    }
}

impl HostClock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock()
    }
}

/// Projects an instant onto its local time-of-day fields.
///
/// A leap second (nanoseconds ≥ 1e9) is reported as millisecond 999.
pub fn get_standard_time<T: Timelike>(instant: &T) -> StandardTime {
    StandardTime {
        hours: instant.hour(),
        minutes: instant.minute(),
        seconds: instant.second(),
        milliseconds: (instant.nanosecond() / 1_000_000).min(999),
    }
}

/// Decimal time of an instant's local time of day.
#[inline]
pub fn to_decimal_time<T: Timelike>(instant: &T) -> DecimalTime {
    decimal_time::to_decimal_time(&get_standard_time(instant))
}

/// Today's date at the given time of day, or `None` for out-of-range fields.
pub fn instant_today(time: StandardTime) -> Option<NaiveDateTime> {
    let tod = NaiveTime::from_hms_milli_opt(time.hours, time.minutes, time.seconds, time.milliseconds)?;
    Some(Local::now().date_naive().and_time(tod))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn instant(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap().and_hms_milli_opt(h, m, s, ms).unwrap()
    }

    #[test]
    fn projects_time_of_day_fields() {
        let t = get_standard_time(&instant(13, 7, 42, 250));
        assert_eq!(t, StandardTime { hours: 13, minutes: 7, seconds: 42, milliseconds: 250 });
    }

    #[test]
    fn date_does_not_affect_conversion() {
        let a = to_decimal_time(&instant(18, 0, 0, 0));
        let b = to_decimal_time(&NaiveDate::from_ymd_opt(1793, 11, 24).unwrap().and_hms_opt(18, 0, 0).unwrap());
        assert_eq!(a, b);
        assert_eq!((a.hours, a.minutes), (7, 50));
    }

    #[test]
    fn leap_second_clamps_milliseconds() {
        let leap = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).unwrap();
        let t = get_standard_time(&leap);
        assert_eq!(t.seconds, 59);
        assert_eq!(t.milliseconds, 999);
    }

    #[test]
    fn manual_clock_moves_only_when_told() {
        let clock = ManualClock::new(instant(0, 0, 0, 0));
        assert_eq!(clock.now(), instant(0, 0, 0, 0));
        clock.advance(TimeDelta::milliseconds(1_500));
        assert_eq!(clock.now(), instant(0, 0, 1, 500));
        clock.set(instant(12, 0, 0, 0));
        assert_eq!(get_standard_time(&clock.now()).hours, 12);
    }

    #[test]
    fn instant_today_keeps_time_of_day() {
        let at = StandardTime::new(9, 30, 0, 5).unwrap();
        let today = instant_today(at).unwrap();
        assert_eq!(get_standard_time(&today), at);
        assert!(instant_today(StandardTime { hours: 25, ..at }).is_none());
    }
}
