use chrono::NaiveDateTime;

use decimal_time::{DecimalTime, StandardTime};

use super::clock::{get_standard_time, HostClock};

/// Everything derived from one host-clock sample.
///
/// Snapshots are immutable values; the ticker replaces the published one on
/// every refresh and never mutates it in place.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockSnapshot {
    /// Local wall-clock instant the snapshot was derived from.
    pub instant: NaiveDateTime,
    pub standard: StandardTime,
    pub decimal: DecimalTime,
    /// Refresh counter. `0` is the sample taken when the ticker was created.
    pub sequence: u64,
}

impl ClockSnapshot {
    /// Derives both time representations from `instant`.
    pub fn at(instant: NaiveDateTime, sequence: u64) -> Self {
        let standard = get_standard_time(&instant);
        Self {
            instant,
            standard,
            decimal: decimal_time::to_decimal_time(&standard),
            sequence,
        }
    }

    /// Samples `clock` exactly once.
    #[inline]
    pub fn sample(clock: &dyn HostClock, sequence: u64) -> Self {
        Self::at(clock.now(), sequence)
    }
}
