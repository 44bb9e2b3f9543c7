//! status-blink — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  StatusDir          SysfsPin          ThreadDelay        │
//! │  (StatusRegistry)   (OutputPin)       (DelayNs)          │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ───────────────     │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │        IndicatorService (pure logic)           │      │
//! │  │  HealthAggregator · SignalDriver               │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use tracing::{Level, info};

use status_blink::adapters::status_dir::StatusDir;
use status_blink::adapters::time::ThreadDelay;
use status_blink::app::service::IndicatorService;
use status_blink::config::IndicatorConfig;
use status_blink::drivers::hw_init;
use status_blink::pins;

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    // The fmt subscriber also bridges the library's `log` records.
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("status-blink v{} starting", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = IndicatorConfig::default();
    config.validate().context("built-in configuration rejected")?;
    info!("config: {}", serde_json::to_string(&config)?);

    // ── 3. Hardware ───────────────────────────────────────────
    let led = hw_init::init_peripherals(pins::SYSFS_GPIO_ROOT).context("hardware init failed")?;

    // ── 4. Cycle loop ─────────────────────────────────────────
    let registry = StatusDir::new(&config.status_dir);
    info!("watching {}", registry.root().display());

    let mut service = IndicatorService::new(&config, registry, led, ThreadDelay::new(), ThreadDelay::new());
    service.run()
}
