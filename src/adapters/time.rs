//! Blocking delay adapter.
//!
//! Implements `embedded_hal::delay::DelayNs` with `std::thread::sleep`,
//! which is all the single-threaded cycle loop needs on Linux.

use std::thread;
use std::time::Duration;

use embedded_hal::delay::DelayNs;

/// Sleeps the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDelay;

impl ThreadDelay {
    pub fn new() -> Self {
        Self
    }
}

impl DelayNs for ThreadDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        thread::sleep(Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
