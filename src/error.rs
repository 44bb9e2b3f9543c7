//! Unified error types for the status-blink daemon.
//!
//! A single `Error` enum for start-up failures. Pin writes inside the cycle
//! loop keep their own [`GpioError`] so the signal driver stays generic.
//! All variants are `Copy` so they can be logged and passed around the
//! cycle loop without allocation. Health anomalies are never errors: they
//! degrade to a severity code inside [`crate::health`].

use core::fmt;

use crate::drivers::hw_init::HwInitError;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible start-up step funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed.
    HwInit(HwInitError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HwInit(e) => write!(f, "init: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// GPIO errors
// ---------------------------------------------------------------------------

/// Which sysfs step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioOp {
    Export,
    Direction,
    Write,
}

impl fmt::Display for GpioOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Export => write!(f, "export"),
            Self::Direction => write!(f, "set direction"),
            Self::Write => write!(f, "write value"),
        }
    }
}

/// A sysfs GPIO failure. `errno` is the raw OS error, 0 if none was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioError {
    pub pin: u32,
    pub op: GpioOp,
    pub errno: i32,
}

impl GpioError {
    pub fn from_io(pin: u32, op: GpioOp, err: &std::io::Error) -> Self {
        Self {
            pin,
            op,
            errno: err.raw_os_error().unwrap_or(0),
        }
    }
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO {} {} failed (errno={})", self.pin, self.op, self.errno)
    }
}

impl std::error::Error for GpioError {}

impl embedded_hal::digital::Error for GpioError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::HwInit(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
