use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::{Handle, TryCurrentError};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::clock::{HostClock, SystemClock};
use super::snapshot::ClockSnapshot;

/// Refresh cadence for a [`Ticker`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TickerConfig {
    /// Time between refreshes. Not validated; see [`TickerConfig::period`].
    pub interval: Duration,
}

impl TickerConfig {
    /// 50 Hz, enough for a smooth sweeping second hand.
    pub const DEFAULT_INTERVAL_MS: u64 = 20;

    pub fn from_millis(ms: u64) -> Self {
        Self { interval: Duration::from_millis(ms) }
    }

    /// Period handed to the scheduler.
    ///
    /// The tokio timer rejects a zero period, so zero is raised to 1 ms.
    pub fn period(&self) -> Duration {
        self.interval.max(Duration::from_millis(1))
    }
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self::from_millis(Self::DEFAULT_INTERVAL_MS)
    }
}

/// Errors raised while scheduling a [`Ticker`].
#[derive(Debug, thiserror::Error)]
pub enum TickerError {
    #[error("the ticker needs a tokio runtime to schedule refreshes: {0}")]
    NoRuntime(#[from] TryCurrentError),
}

/// State shared between the ticker handle and its scheduled task.
struct Shared<C> {
    clock: Arc<C>,
    /// Next sequence number. Held across the publish so refreshes are
    /// published in sequence order.
    next_sequence: Mutex<u64>,
    tx: watch::Sender<ClockSnapshot>,
}

impl<C: HostClock> Shared<C> {
    fn refresh(&self) -> ClockSnapshot {
        let mut next = self.next_sequence.lock();
        let snapshot = ClockSnapshot::sample(self.clock.as_ref(), *next);
        *next += 1;
        self.tx.send_replace(snapshot);
        snapshot
    }
}

/// One live scheduler registration.
///
/// `live` is the publication gate: the task holds it for the whole refresh,
/// and cancellation clears it under the same lock, so once [`cancel`]
/// returns nothing more can be published by this registration.
///
/// [`cancel`]: Registration::cancel
struct Registration {
    live: Arc<Mutex<bool>>,
    handle: JoinHandle<()>,
}

impl Registration {
    fn cancel(self) {
        *self.live.lock() = false;
        self.handle.abort();
    }
}

/// Periodically samples a [`HostClock`] and publishes [`ClockSnapshot`]s.
///
/// Lifecycle:
/// - `new`/`with_clock` take an initial sample (sequence 0) but schedule nothing
/// - `start` registers exactly one recurring refresh on the current tokio runtime
/// - `stop` (or drop) unregisters it; no refresh is published afterwards
/// - `set_interval` tears down the running registration before starting a new one
///
/// Consumers either read [`latest`](Ticker::latest) or hold a
/// [`watch::Receiver`] from [`subscribe`](Ticker::subscribe). Only the most
/// recent snapshot is kept.
pub struct Ticker<C: HostClock = SystemClock> {
    config: TickerConfig,
    shared: Arc<Shared<C>>,
    registration: Option<Registration>,
}

impl Ticker<SystemClock> {
    /// A ticker over the operating system's local clock.
    pub fn new(config: TickerConfig) -> Self {
        Self::with_clock(Arc::new(SystemClock), config)
    }
}

impl<C: HostClock> Ticker<C> {
    pub fn with_clock(clock: Arc<C>, config: TickerConfig) -> Self {
        let initial = ClockSnapshot::sample(clock.as_ref(), 0);
        let (tx, _rx) = watch::channel(initial);
        Self {
            config,
            shared: Arc::new(Shared { clock, next_sequence: Mutex::new(1), tx }),
            registration: None,
        }
    }

    #[inline]
    pub fn config(&self) -> TickerConfig {
        self.config
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.registration.is_some()
    }

    /// Most recently published snapshot.
    pub fn latest(&self) -> ClockSnapshot {
        *self.shared.tx.borrow()
    }

    /// Receiver that observes every future publication.
    pub fn subscribe(&self) -> watch::Receiver<ClockSnapshot> {
        self.shared.tx.subscribe()
    }

    /// Samples the clock once, publishes, and returns the new snapshot.
    ///
    /// Works whether or not the ticker is running.
    pub fn refresh(&self) -> ClockSnapshot {
        self.shared.refresh()
    }

    /// Starts refreshing every `config.period()`. The first refresh happens
    /// immediately.
    ///
    /// Restarts cleanly if already running. Outside a tokio runtime this
    /// returns [`TickerError::NoRuntime`] and leaves any running schedule as
    /// it was.
    pub fn start(&mut self) -> Result<(), TickerError> {
        let runtime = Handle::try_current()?;
        self.stop();

        let period = self.config.period();
        let live = Arc::new(Mutex::new(true));
        let gate = Arc::clone(&live);
        let shared = Arc::clone(&self.shared);

        let handle = runtime.spawn(async move {
            let mut ticks = tokio::time::interval(period);
            // A late refresh reads the clock anyway; catching up would only
            // publish stale duplicates.
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticks.tick().await;
                let live = gate.lock();
                if !*live {
                    break;
                }
                shared.refresh();
            }
        });

        log::debug!("ticker started ({period:?})");
        self.registration = Some(Registration { live, handle });
        Ok(())
    }

    /// Stops refreshing. Idempotent.
    pub fn stop(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.cancel();
            log::debug!("ticker stopped");
        }
    }

    /// Changes the refresh cadence, restarting the schedule if it was running.
    pub fn set_interval(&mut self, config: TickerConfig) -> Result<(), TickerError> {
        self.config = config;
        if self.is_running() {
            self.start()?;
        }
        Ok(())
    }
}

impl<C: HostClock> Drop for Ticker<C> {
    fn drop(&mut self) {
        self.stop();
    }
}
