//! Millisecond time source abstraction for platform-agnostic timing.
//!
//! The `Clock` trait is the single capability the timer needs from the host:
//! a free-running millisecond counter that wraps at `u32::MAX`, the way a
//! SysTick-driven `millis()` does on most microcontrollers.
//!
//! Ready-made implementations:
//! - [`FnClock`] wraps any `Fn() -> u32` (e.g. a HAL `millis()` function)
//! - `&C` forwards to `C`, so one clock can be shared by several timers
//! - [`StdClock`] (feature `std`) for hosted targets
//! - [`EmbassyClock`] (feature `embassy`) for embassy-time based firmware

/// Platform-agnostic monotonic millisecond clock.
///
/// Implementations must be cheap to call and must never block; the timer
/// reads the clock on every poll.
pub trait Clock {
    /// Current tick count in milliseconds.
    ///
    /// The counter is expected to wrap to zero after `u32::MAX`. Elapsed time
    /// is computed wraparound-safe as long as at most one wrap happens between
    /// two reads.
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Adapter turning a closure or function into a [`Clock`].
///
/// ```
/// use loop_delay::{Clock, FnClock};
///
/// fn millis() -> u32 {
///     42
/// }
///
/// let clock = FnClock(millis);
/// assert_eq!(clock.now_ms(), 42);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct FnClock<F>(pub F);

impl<F: Fn() -> u32> Clock for FnClock<F> {
    fn now_ms(&self) -> u32 {
        (self.0)()
    }
}

/// Host clock measuring milliseconds since its own construction.
///
/// Truncated to `u32`, so it wraps after ~49.7 days like a hardware counter.
#[cfg(feature = "std")]
#[derive(Debug, Copy, Clone)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Create a clock whose zero is the current instant.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_ms(&self) -> u32 {
        self.origin.elapsed().as_millis() as u32
    }
}

/// Clock backed by `embassy_time::Instant`.
///
/// Requires an embassy time driver to be linked in.
#[cfg(feature = "embassy")]
#[derive(Debug, Copy, Clone, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy")]
impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        embassy_time::Instant::now().as_millis() as u32
    }
}
