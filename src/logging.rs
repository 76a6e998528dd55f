//! Logging abstraction
//!
//! Internal logging macros that work across targets:
//! - Embedded (`defmt` feature): forwards to defmt
//! - Unit tests: prints to stdout
//! - Everything else: no-op
//!
//! Format strings must stay compatible with both defmt and `core::fmt`, so
//! only positional `{}` placeholders are used.

/// Log debug message
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", not(test)))]
        ::defmt::debug!($($arg)*);

        #[cfg(test)]
        ::std::println!("[DEBUG] {}", ::std::format!($($arg)*));
    }};
}

/// Log trace message
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", not(test)))]
        ::defmt::trace!($($arg)*);

        #[cfg(test)]
        ::std::println!("[TRACE] {}", ::std::format!($($arg)*));
    }};
}

pub(crate) use log_debug;
pub(crate) use log_trace;
