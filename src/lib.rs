//! status-blink library.
//!
//! Health aggregation over a directory of status files, and a blink-code
//! driver that renders the result on a single LED. Everything here is
//! hardware-agnostic except `drivers`, which talks to Linux sysfs GPIO.

#![deny(unused_must_use)]

pub mod app;
pub mod blink;
pub mod config;
pub mod error;
pub mod health;
pub mod pins;
pub mod severity;

pub mod adapters;
pub mod drivers;

pub use blink::{BlinkProtocol, BlinkSequence, BlinkSymbol, SignalDriver, SyncPlacement};
pub use health::HealthAggregator;
pub use severity::Severity;
