//! Configuration traits and implementations for interval bounds.
//!
//! The `DelayConfig` trait allows compile-time configuration of the accepted
//! interval range without runtime overhead.

/// Smallest interval accepted by [`DefaultConfig`], in milliseconds.
pub const MIN_INTERVAL: u32 = 0;

/// Largest interval accepted by [`DefaultConfig`], in milliseconds (10 hours).
pub const MAX_INTERVAL: u32 = 36_000_000;

/// Timer configuration trait defining the accepted interval range.
///
/// All values are const (zero runtime cost). Intervals outside
/// `MIN_INTERVAL..=MAX_INTERVAL` are clamped by `set_interval()` and rejected
/// by `try_set_interval()`.
pub trait DelayConfig {
    /// Minimum interval in milliseconds (default: 0)
    const MIN_INTERVAL: u32;

    /// Maximum interval in milliseconds (default: 36_000_000)
    const MAX_INTERVAL: u32;

    /// Clamp `ms` into the configured range.
    fn clamp(ms: u32) -> u32 {
        ms.clamp(Self::MIN_INTERVAL, Self::MAX_INTERVAL)
    }

    /// Whether `ms` lies inside the configured range.
    fn contains(ms: u32) -> bool {
        (Self::MIN_INTERVAL..=Self::MAX_INTERVAL).contains(&ms)
    }
}

/// Default configuration:
/// - MIN_INTERVAL: 0 ms (a zero interval keeps the timer paused)
/// - MAX_INTERVAL: 36_000_000 ms (10 hours)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultConfig;

impl DelayConfig for DefaultConfig {
    const MIN_INTERVAL: u32 = MIN_INTERVAL;
    const MAX_INTERVAL: u32 = MAX_INTERVAL;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Narrow;

    impl DelayConfig for Narrow {
        const MIN_INTERVAL: u32 = 10;
        const MAX_INTERVAL: u32 = 100;
    }

    #[test]
    fn test_default_config() {
        assert_eq!(DefaultConfig::MIN_INTERVAL, 0);
        assert_eq!(DefaultConfig::MAX_INTERVAL, 36_000_000);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(DefaultConfig::clamp(0), 0);
        assert_eq!(DefaultConfig::clamp(500), 500);
        assert_eq!(DefaultConfig::clamp(u32::MAX), MAX_INTERVAL);

        assert_eq!(Narrow::clamp(3), 10);
        assert_eq!(Narrow::clamp(50), 50);
        assert_eq!(Narrow::clamp(101), 100);
    }

    #[test]
    fn test_contains() {
        assert!(DefaultConfig::contains(MAX_INTERVAL));
        assert!(!DefaultConfig::contains(MAX_INTERVAL + 1));
        assert!(!Narrow::contains(9));
        assert!(Narrow::contains(10));
    }
}
