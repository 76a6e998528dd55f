//! Test fixtures and utilities for loop-delay testing.
//!
//! Provides:
//! - `MockClock`: Test implementation of the Clock trait with settable time
//! - Callback probes: `fn()` callbacks that record into thread-local state
//!   (tests run on separate threads, so probes never interfere)

#![allow(dead_code)]

use loop_delay::Clock;
use std::cell::{Cell, RefCell};

// ============================================================================
// MockClock - Simulated Millisecond Counter
// ============================================================================

/// Simulated millisecond clock.
///
/// Timers borrow it (`&MockClock` implements `Clock`), so the test keeps
/// control over time after handing it to a timer.
#[derive(Debug, Default)]
pub struct MockClock {
    now: Cell<u32>,
}

impl MockClock {
    /// Create clock at t = 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create clock at a given reading.
    pub fn at(ms: u32) -> Self {
        Self { now: Cell::new(ms) }
    }

    /// Jump to an absolute reading.
    pub fn set(&self, ms: u32) {
        self.now.set(ms);
    }

    /// Advance by `ms`, wrapping like a hardware counter.
    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }

    /// Current reading.
    pub fn get(&self) -> u32 {
        self.now.get()
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

// ============================================================================
// Callback Probes
// ============================================================================

thread_local! {
    static FIRED: Cell<u32> = const { Cell::new(0) };
    static TRACE: RefCell<heapless::Vec<char, 32>> = const { RefCell::new(heapless::Vec::new()) };
}

/// Callback counting its invocations.
pub fn count_callback() {
    FIRED.with(|f| f.set(f.get() + 1));
}

/// Callback recording `'a'` into the trace.
pub fn trace_a() {
    TRACE.with(|t| {
        let _ = t.borrow_mut().push('a');
    });
}

/// Callback recording `'b'` into the trace.
pub fn trace_b() {
    TRACE.with(|t| {
        let _ = t.borrow_mut().push('b');
    });
}

/// Invocations of `count_callback` on this thread.
pub fn fired() -> u32 {
    FIRED.with(|f| f.get())
}

/// Trace recorded by `trace_a` / `trace_b` on this thread.
pub fn trace() -> heapless::Vec<char, 32> {
    TRACE.with(|t| t.borrow().clone())
}
