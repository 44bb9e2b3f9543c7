//! Linux sysfs GPIO output pin.
//!
//! Exports the line through `<root>/export` when it is not yet visible,
//! configures it as an output driven low, and writes `1`/`0` to
//! `<root>/gpio<N>/value`. Implements `embedded_hal::digital::OutputPin`
//! so the signal driver never sees the filesystem.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use embedded_hal::digital::{ErrorType, OutputPin};
use log::{debug, info};

use crate::error::{GpioError, GpioOp};

/// Polls for the `direction` attribute after an export (udev may lag).
const EXPORT_SETTLE_POLLS: u32 = 10;
const EXPORT_SETTLE_INTERVAL: Duration = Duration::from_millis(10);

/// An exported sysfs GPIO configured as an output.
#[derive(Debug)]
pub struct SysfsPin {
    pin: u32,
    value_path: PathBuf,
}

impl SysfsPin {
    /// Acquire `pin` under `root` (normally [`crate::pins::SYSFS_GPIO_ROOT`])
    /// as an output, initially low.
    pub fn output(root: impl AsRef<Path>, pin: u32) -> Result<Self, GpioError> {
        let root = root.as_ref();
        let gpio_dir = root.join(format!("gpio{pin}"));
        let direction = gpio_dir.join("direction");

        if !gpio_dir.exists() {
            // sysfs attributes always exist; never create one.
            OpenOptions::new()
                .write(true)
                .open(root.join("export"))
                .and_then(|mut f| f.write_all(pin.to_string().as_bytes()))
                .map_err(|e| GpioError::from_io(pin, GpioOp::Export, &e))?;
            for _ in 0..EXPORT_SETTLE_POLLS {
                if direction.exists() {
                    break;
                }
                thread::sleep(EXPORT_SETTLE_INTERVAL);
            }
            info!("gpio: exported GPIO {}", pin);
        }

        // "low" selects output and drives 0 in one step, so the line never glitches high.
        fs::write(&direction, "low").map_err(|e| GpioError::from_io(pin, GpioOp::Direction, &e))?;
        debug!("gpio: GPIO {} configured as output", pin);

        Ok(Self {
            pin,
            value_path: gpio_dir.join("value"),
        })
    }

    pub fn pin(&self) -> u32 {
        self.pin
    }

    fn write_level(&mut self, high: bool) -> Result<(), GpioError> {
        fs::write(&self.value_path, if high { "1" } else { "0" })
            .map_err(|e| GpioError::from_io(self.pin, GpioOp::Write, &e))
    }
}

impl ErrorType for SysfsPin {
    type Error = GpioError;
}

impl OutputPin for SysfsPin {
    fn set_low(&mut self) -> Result<(), GpioError> {
        self.write_level(false)
    }

    fn set_high(&mut self) -> Result<(), GpioError> {
        self.write_level(true)
    }
}
