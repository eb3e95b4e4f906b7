//! Time subsystem.
//!
//! Provides the host clock seam, conversion from clock instants, and the
//! refresh ticker. Intended usage:
//! - one `Ticker` per display surface
//! - read `Ticker::latest()` or `subscribe()` to observe snapshots

mod clock;
mod snapshot;
mod ticker;

pub use clock::{get_standard_time, instant_today, to_decimal_time, HostClock, ManualClock, SystemClock};
pub use snapshot::ClockSnapshot;
pub use ticker::{Ticker, TickerConfig, TickerError};
