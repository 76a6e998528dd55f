#![no_std]
#![no_main]

use core::sync::atomic::{AtomicU32, Ordering};
use cortex_m::peripheral::syst::SystClkSource;
use cortex_m_rt::{entry, exception};
use loop_delay::{Clock, IntervalTimer};
use panic_halt as _;

// Core clock assumed for the SysTick reload value
const CORE_HZ: u32 = 8_000_000;

static MILLIS: AtomicU32 = AtomicU32::new(0);

#[exception]
fn SysTick() {
    MILLIS.fetch_add(1, Ordering::Relaxed);
}

// SysTick-driven millisecond counter
pub struct SysTickClock;

impl Clock for SysTickClock {
    fn now_ms(&self) -> u32 {
        MILLIS.load(Ordering::Relaxed)
    }
}

fn on_tick() {
    cortex_m::asm::nop();
}

#[entry]
fn main() -> ! {
    let mut cp = cortex_m::Peripherals::take().unwrap();
    cp.SYST.set_clock_source(SystClkSource::Core);
    cp.SYST.set_reload(CORE_HZ / 1_000 - 1);
    cp.SYST.clear_current();
    cp.SYST.enable_counter();
    cp.SYST.enable_interrupt();

    let mut blink = IntervalTimer::with_interval(SysTickClock, 500);
    blink.set_callback(Some(on_tick));

    loop {
        if blink.is_ready() && blink.is_even() {
            blink.reset_count();
        }
    }
}
