//! Error types for timer configuration.
//!
//! The timer itself never fails: out-of-range intervals are clamped. The
//! `DelayError` enum is only produced by the strict setter
//! `IntervalTimer::try_set_interval()`.

use core::fmt;

/// Timer configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DelayError {
    /// Requested interval lies outside the configured range
    IntervalOutOfRange {
        /// Interval passed by the caller, in milliseconds
        requested: u32,
        /// Smallest accepted interval
        min: u32,
        /// Largest accepted interval
        max: u32,
    },
}

impl fmt::Display for DelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelayError::IntervalOutOfRange {
                requested,
                min,
                max,
            } => write!(f, "Interval {} ms outside {}..={} ms", requested, min, max),
        }
    }
}

impl core::error::Error for DelayError {}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::format;

    #[test]
    fn test_error_display() {
        let err = DelayError::IntervalOutOfRange {
            requested: 36_000_001,
            min: 0,
            max: 36_000_000,
        };
        assert_eq!(
            format!("{}", err),
            "Interval 36000001 ms outside 0..=36000000 ms"
        );
    }

    #[test]
    fn test_error_equality() {
        let a = DelayError::IntervalOutOfRange {
            requested: 1,
            min: 5,
            max: 10,
        };
        let b = DelayError::IntervalOutOfRange {
            requested: 11,
            min: 5,
            max: 10,
        };
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
