//! Host demo: print an activation counter once per interval.
//!
//! Usage: `delay-demo [settings.toml]`
//!
//! ```toml
//! interval_ms = 500
//! iterations = 10
//! ```
//!
//! Without a settings file the demo ticks every 500 ms, ten times.

use std::error::Error;
use std::fmt::Write as _;
use std::time::Duration;
use std::{env, fs, thread};

use loop_delay::{IntervalTimer, StdClock};
use serde::Deserialize;

/// Demo settings, read from TOML.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoSettings {
    interval_ms: u32,
    iterations: u32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            interval_ms: 500,
            iterations: 10,
        }
    }
}

fn load_settings() -> Result<DemoSettings, Box<dyn Error>> {
    match env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)?;
            Ok(toml::from_str(&text)?)
        }
        None => Ok(DemoSettings::default()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let settings = load_settings()?;
    if settings.interval_ms == 0 {
        return Err("interval_ms must be non-zero".into());
    }

    let mut timer = IntervalTimer::new(StdClock::new());
    timer.try_set_interval(settings.interval_ms)?;

    // Fixed-size line buffer, as on a serial port without an allocator
    let mut line: heapless::String<32> = heapless::String::new();

    while timer.count() < settings.iterations {
        if timer.is_ready() {
            line.clear();
            write!(line, "count: {}", timer.count()).map_err(|_| "line buffer overflow")?;
            println!("{}", line);
        }

        // Other loop work would go here
        thread::sleep(Duration::from_millis(1));
    }

    Ok(())
}
