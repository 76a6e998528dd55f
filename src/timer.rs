//! Non-blocking interval timer.
//!
//! `IntervalTimer` measures elapsed milliseconds against a configured interval
//! and is polled from the caller's main loop. Two queries share one state
//! machine but differ in how they re-arm:
//!
//! - [`IntervalTimer::is_done`] latches: once the interval has elapsed it keeps
//!   returning `true` until [`IntervalTimer::reset_time`] is called. Use it to
//!   guard long-running work and reset after the work is finished.
//! - [`IntervalTimer::is_ready`] auto-resets on every firing, giving one
//!   `true` per interval.
//!
//! ```
//! use core::cell::Cell;
//! use loop_delay::{Clock, IntervalTimer};
//!
//! struct Ticks(Cell<u32>);
//!
//! impl Clock for Ticks {
//!     fn now_ms(&self) -> u32 {
//!         self.0.get()
//!     }
//! }
//!
//! let clock = Ticks(Cell::new(0));
//! let mut blink = IntervalTimer::with_interval(&clock, 500);
//!
//! clock.0.set(499);
//! assert!(!blink.is_ready());
//!
//! clock.0.set(500);
//! assert!(blink.is_ready());
//! assert_eq!(blink.count(), 1);
//! assert_eq!(blink.timestamp(), 500);
//! ```

use core::marker::PhantomData;

use crate::clock::Clock;
use crate::config::{DefaultConfig, DelayConfig};
use crate::error::DelayError;
use crate::logging::{log_debug, log_trace};

/// Zero-argument procedure invoked each time the timer reports completion.
///
/// A plain function pointer: the timer copies it but never owns anything
/// behind it.
pub type Callback = fn();

/// Polled interval timer over an injected [`Clock`].
///
/// `K` selects the accepted interval range (see [`DelayConfig`]).
#[derive(Debug)]
pub struct IntervalTimer<C, K = DefaultConfig> {
    clock: C,
    interval: u32,
    timestamp: u32,
    paused: bool,
    count: u32,
    callback: Option<Callback>,
    _config: PhantomData<K>,
}

impl<C: Clock> IntervalTimer<C> {
    /// Create a timer with a zero interval.
    ///
    /// A zero interval keeps the timer paused until a non-zero interval is set.
    pub fn new(clock: C) -> Self {
        Self::with_config(clock, 0)
    }

    /// Create a timer and immediately apply `set_interval(interval_ms)`.
    pub fn with_interval(clock: C, interval_ms: u32) -> Self {
        Self::with_config(clock, interval_ms)
    }
}

impl<C: Clock, K: DelayConfig> IntervalTimer<C, K> {
    /// Create a timer using the interval bounds of `K`.
    ///
    /// ```ignore
    /// let timer = IntervalTimer::<_, MyConfig>::with_config(clock, 250);
    /// ```
    pub fn with_config(clock: C, interval_ms: u32) -> Self {
        let mut timer = Self {
            clock,
            interval: 0,
            timestamp: 0,
            paused: true,
            count: 0,
            callback: None,
            _config: PhantomData,
        };
        timer.set_interval(interval_ms);
        timer
    }

    /// Set the interval, clamped into `K::MIN_INTERVAL..=K::MAX_INTERVAL`,
    /// and restart timing from now.
    pub fn set_interval(&mut self, interval_ms: u32) {
        let clamped = K::clamp(interval_ms);
        if clamped != interval_ms {
            log_debug!("interval {} ms clamped to {} ms", interval_ms, clamped);
        }

        self.interval = clamped;
        self.reset_time();
    }

    /// Set the interval, rejecting values outside the configured range.
    ///
    /// On error the timer is left untouched.
    pub fn try_set_interval(&mut self, interval_ms: u32) -> Result<(), DelayError> {
        if !K::contains(interval_ms) {
            return Err(DelayError::IntervalOutOfRange {
                requested: interval_ms,
                min: K::MIN_INTERVAL,
                max: K::MAX_INTERVAL,
            });
        }

        self.set_interval(interval_ms);
        Ok(())
    }

    /// Configured interval in milliseconds.
    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Stop the timer from reporting completion. Elapsed time is not kept.
    pub fn pause(&mut self) {
        log_debug!("timer paused at {} ms", self.timestamp);
        self.paused = true;
    }

    /// Resume a paused timer, restarting timing from now.
    ///
    /// A zero-interval timer stays paused.
    pub fn resume(&mut self) {
        self.paused = false;
        self.reset_time();
        log_debug!("timer resumed at {} ms", self.timestamp);
    }

    /// Whether completion checks are currently suppressed.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Set or clear the completion callback.
    pub fn set_callback(&mut self, callback: Option<Callback>) {
        self.callback = callback;
    }

    /// Whether a callback is set.
    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// The current callback, if any.
    pub fn callback(&self) -> Option<Callback> {
        self.callback
    }

    /// Restart timing from the current clock reading.
    pub fn reset_time(&mut self) {
        self.timestamp = self.clock.now_ms();
        self.paused = self.interval == 0;
    }

    /// Clock reading at the last reset.
    pub fn timestamp(&self) -> u32 {
        self.timestamp
    }

    /// Milliseconds elapsed since the last reset.
    ///
    /// Handles a single wrap of the clock counter between the reset and now.
    pub fn delta(&self) -> u32 {
        let now = self.clock.now_ms();
        if now < self.timestamp {
            (u32::MAX - self.timestamp) + now
        } else {
            now - self.timestamp
        }
    }

    /// Whether the interval has elapsed since the last reset.
    ///
    /// Each `true` result increments the count and runs the callback. The
    /// timestamp is NOT reset, so repeated calls keep returning `true` until
    /// `reset_time()` is called:
    ///
    /// ```ignore
    /// if job.is_done() {
    ///     long_running_work();
    ///     job.reset_time();
    /// }
    /// ```
    ///
    /// Never returns `true` while paused or with a zero interval.
    pub fn is_done(&mut self) -> bool {
        if self.paused || self.interval == 0 {
            return false;
        }

        if self.delta() < self.interval {
            return false;
        }

        self.count = self.count.saturating_add(1);
        log_trace!("interval of {} ms elapsed, count {}", self.interval, self.count);

        if let Some(callback) = self.callback {
            callback();
        }

        true
    }

    /// Like [`is_done`](Self::is_done), but resets timing whenever it returns
    /// `true`, so it fires once per interval.
    ///
    /// Work done after a `true` result eats into the next interval. Prefer
    /// `is_done()` + `reset_time()` around variable-length work.
    pub fn is_ready(&mut self) -> bool {
        let fired = self.is_done();
        if fired {
            self.reset_time();
        }
        fired
    }

    /// Number of completions reported since creation or the last
    /// `reset_count()`.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Reset the completion count to zero.
    pub fn reset_count(&mut self) {
        self.count = 0;
    }

    /// Count is non-zero and even.
    pub fn is_even(&self) -> bool {
        self.count != 0 && self.count % 2 == 0
    }

    /// Count is odd.
    pub fn is_odd(&self) -> bool {
        self.count % 2 == 1
    }

    /// Timer has never reported completion (count is zero).
    pub fn is_never(&self) -> bool {
        self.count == 0
    }
}
