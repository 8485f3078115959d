//! Minimum-interval gate for the quota-limited primary provider.
//!
//! A single process-wide "last granted" instant. The gate never queues or
//! sleeps: it only tells the caller to proceed or to skip the provider.

use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use log::{debug, warn};

/// Default interval between granted calls (5 calls per minute upstream).
pub const MIN_API_INTERVAL: Duration = Duration::from_secs(12);

/// Process-wide rate governor.
///
/// The check and the update happen under one lock acquisition, so two
/// concurrent callers can never both observe the pre-update timestamp.
pub struct RateGovernor {
    min_interval: Duration,
    last_granted: Mutex<Option<Instant>>,
}

impl RateGovernor {
    /// Create a governor with the default 12 second interval.
    pub fn new() -> Self {
        Self::with_interval(MIN_API_INTERVAL)
    }

    pub fn with_interval(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_granted: Mutex::new(None),
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Lock the timestamp, recovering from poison if necessary.
    ///
    /// The guarded value is a plain instant; a panic elsewhere cannot leave
    /// it half-written.
    fn lock_last_granted(&self) -> MutexGuard<'_, Option<Instant>> {
        self.last_granted.lock().unwrap_or_else(|poisoned| {
            warn!("Rate governor mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Grant a call iff `min_interval` has elapsed since the last grant.
    ///
    /// On grant the timestamp moves to now as part of the same operation.
    pub fn try_acquire(&self) -> bool {
        self.try_acquire_at(Instant::now())
    }

    fn try_acquire_at(&self, now: Instant) -> bool {
        let mut last = self.lock_last_granted();

        let granted = match *last {
            Some(previous) => now.saturating_duration_since(previous) >= self.min_interval,
            None => true,
        };

        if granted {
            *last = Some(now);
            debug!("Rate governor: granted");
        } else {
            debug!("Rate governor: denied");
        }

        granted
    }

    /// How long until the next call would be granted.
    pub fn time_until_available(&self) -> Duration {
        let last = self.lock_last_granted();
        match *last {
            Some(previous) => self.min_interval.saturating_sub(previous.elapsed()),
            None => Duration::ZERO,
        }
    }
}

impl Default for RateGovernor {
    fn default() -> Self {
        Self::new()
    }
}
