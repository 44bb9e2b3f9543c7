//! System configuration parameters
//!
//! All tunable parameters for the status indicator. There is no config
//! file: the daemon runs on [`IndicatorConfig::default()`], and tests or
//! alternate builds construct their own.

use serde::{Deserialize, Serialize};

use crate::blink::{BlinkProtocol, BlinkTiming, MAX_BIT_WIDTH};
use crate::error::{Error, Result};

/// Directory the daemons drop their status files into.
pub const DEFAULT_STATUS_DIR: &str = "/tmp/status/";

/// Core indicator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    // --- Health ---
    /// Directory scanned for status records every cycle
    pub status_dir: String,

    // --- Blink protocol ---
    /// Bit width and sync-gap placement of fault sequences
    pub protocol: BlinkProtocol,
    /// LED on/off durations
    pub timing: BlinkTiming,

    // --- Timing ---
    /// Pause after each rendered cycle (milliseconds)
    pub cycle_pause_ms: u32,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            status_dir: DEFAULT_STATUS_DIR.into(),
            protocol: BlinkProtocol::CURRENT,
            timing: BlinkTiming::default(),
            cycle_pause_ms: 1000, // 1 Hz
        }
    }
}

impl IndicatorConfig {
    /// Reject values that would make the LED output unreadable.
    pub fn validate(&self) -> Result<()> {
        if self.status_dir.is_empty() {
            return Err(Error::Config("status_dir is empty"));
        }
        if self.protocol.bit_width == 0 || self.protocol.bit_width > MAX_BIT_WIDTH {
            return Err(Error::Config("bit_width must be in 1..=32"));
        }
        let t = &self.timing;
        if t.heartbeat_on_ms == 0 || t.short_on_ms == 0 || t.long_on_ms == 0 {
            return Err(Error::Config("on-times must be non-zero"));
        }
        if t.long_on_ms <= t.short_on_ms {
            return Err(Error::Config("long blink must outlast short blink"));
        }
        if t.off_ms == 0 || t.sync_gap_ms == 0 {
            return Err(Error::Config("off-times must be non-zero"));
        }
        if self.cycle_pause_ms == 0 {
            return Err(Error::Config("cycle_pause_ms must be non-zero"));
        }
        Ok(())
    }
}
