//! # loop-delay
//!
//! Non-blocking interval timer for polled embedded main loops.
//!
//! **Key features:**
//! - **No blocking** - Poll `is_ready()` / `is_done()` from your own loop
//! - **Injected clock** - Any millisecond counter via the `Clock` trait
//! - **Wraparound-safe** - Survives the 32-bit `millis()` rollover (~49.7 days)
//! - **Callbacks and counting** - Optional `fn()` callback, activation counter
//!   with parity queries
//! - **Zero allocation** - Fixed-size state, no globals
//!
//! ## Optional Features
//!
//! - `std` - `StdClock` backed by `std::time::Instant`
//! - `embassy` - `EmbassyClock` backed by `embassy_time::Instant`
//! - `defmt` - Internal logging via defmt, `defmt::Format` on error types
//! - `demo` - Host demo binary (`delay-demo`)
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

// ============================================================================
// Module Declarations
// ============================================================================

// Internal logging macros (must come before users)
mod logging;

pub mod clock;
pub mod config;
pub mod error;
pub mod timer;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Time source
pub use clock::{Clock, FnClock};

#[cfg(feature = "std")]
pub use clock::StdClock;

#[cfg(feature = "embassy")]
pub use clock::EmbassyClock;

// Configuration
pub use config::{DefaultConfig, DelayConfig, MAX_INTERVAL, MIN_INTERVAL};

// Error types
pub use error::DelayError;

// Timer
pub use timer::{Callback, IntervalTimer};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
