//! Rate limiters gating how often scroll-driven recomputation runs.
//!
//! Both primitives are plain state machines over caller-supplied
//! [`Instant`]s: the crate sets no timers and spawns nothing, so they can be
//! hosted by a thread, an event loop, or a cooperative task equally well.
//! The host observes the pending deadline, sleeps or ticks however it likes,
//! and polls. Neither primitive alters the result of the gated computation,
//! only how often it is allowed to run.
//!
//! Teardown contract: dropping a limiter (or calling
//! [`Debouncer::cancel`] / [`Throttler::reset`]) discards pending work, so
//! nothing ever fires against a consumer that no longer exists.

use std::time::{Duration, Instant};

/// Trailing-edge debouncer: only the last call in a burst runs.
///
/// Each [`call`](Self::call) supersedes any pending run and schedules the
/// latest payload for `now + delay`; [`poll`](Self::poll) fires it once the
/// input stream has been quiet for the full delay. Exactly one execution per
/// burst, with the last call's payload.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
    deadline: Instant,
    payload: T,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record a call. Any pending run is superseded; the new run is due at
    /// `now + delay` with this payload.
    pub fn call(&mut self, now: Instant, payload: T) {
        self.pending = Some(Pending {
            deadline: now + self.delay,
            payload,
        });
    }

    /// Fire the pending run if its deadline has passed.
    ///
    /// Returns the payload to execute, or `None` when nothing is due. A
    /// fired run is consumed; polling again returns `None` until the next
    /// [`call`](Self::call).
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            return self.pending.take().map(|p| p.payload);
        }
        None
    }

    /// Drop the pending run, if any. Returns true when one was discarded.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Whether a run is scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending run becomes due, so hosts can arm a real timer.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// The configured quiet delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Leading-edge throttler: the first call in a quiet period runs, later
/// calls inside the interval are dropped.
///
/// Dropped calls are not queued or deferred; once the interval elapses, the
/// next call runs immediately and restarts the window. At most one accepted
/// run per interval.
#[derive(Debug)]
pub struct Throttler {
    interval: Duration,
    last_run: Option<Instant>,
}

impl Throttler {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
        }
    }

    /// Ask to run now. True means the caller executes the gated action;
    /// false means the call is dropped.
    pub fn try_run(&mut self, now: Instant) -> bool {
        match self.last_run {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last_run = Some(now);
                true
            }
        }
    }

    /// Reopen the window immediately, as if no run had happened.
    pub fn reset(&mut self) {
        self.last_run = None;
    }

    /// The configured minimum spacing between accepted runs.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
