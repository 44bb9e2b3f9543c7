//! One-shot hardware peripheral initialization.
//!
//! Routes the LED line through the I/O expander multiplexer by driving its
//! select lines low, then acquires the status LED pin. Called once from
//! `main()` before the cycle loop starts. Any failure aborts start-up: a
//! daemon that cannot reach its LED has no way to report anything.

use std::path::Path;

use log::info;

use crate::drivers::sysfs_gpio::SysfsPin;
use crate::error::{GpioError, Result};
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    MuxConfigFailed(GpioError),
    LedConfigFailed(GpioError),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MuxConfigFailed(e) => write!(f, "MUX select config failed: {}", e),
            Self::LedConfigFailed(e) => write!(f, "status LED config failed: {}", e),
        }
    }
}

impl std::error::Error for HwInitError {}

// ── Init ──────────────────────────────────────────────────────

/// Configure the MUX lines and return the status LED pin, driven low.
pub fn init_peripherals(sysfs_root: impl AsRef<Path>) -> Result<SysfsPin> {
    let root = sysfs_root.as_ref();
    init_mux(root)?;

    let led = SysfsPin::output(root, pins::STATUS_LED_GPIO).map_err(HwInitError::LedConfigFailed)?;
    info!("hw_init: status LED on GPIO {}", led.pin());
    Ok(led)
}

fn init_mux(root: &Path) -> Result<()> {
    for gpio in pins::MUX_SELECT_GPIOS {
        // Acquisition already drives the line low; the pin handle can go.
        SysfsPin::output(root, gpio).map_err(HwInitError::MuxConfigFailed)?;
    }
    info!("hw_init: MUX select lines {:?} driven low", pins::MUX_SELECT_GPIOS);
    Ok(())
}
