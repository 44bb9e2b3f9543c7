//! Indicator service — the cycle driver.
//!
//! [`IndicatorService`] owns the health aggregator, the signal driver, and
//! the inter-cycle pause. Each [`tick`](IndicatorService::tick) runs one
//! full cycle; the binary calls [`run`](IndicatorService::run) and never
//! returns.
//!
//! ```text
//!  StatusRegistry ──▶ HealthAggregator ──Severity──▶ SignalDriver ──▶ LED
//!                                                         │
//!                                               cycle pause (1 s)
//! ```
//!
//! The severity is handed over by value every cycle. The service keeps the
//! last rendered code purely so it can log transitions.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::{error, info};

use crate::blink::{SignalDriver, SignalState};
use crate::config::IndicatorConfig;
use crate::health::HealthAggregator;
use crate::severity::Severity;

use super::ports::StatusRegistry;

/// Runs aggregate → render → pause, forever.
pub struct IndicatorService<R, P, D, W> {
    aggregator: HealthAggregator<R>,
    driver: SignalDriver<P, D>,
    pause: W,
    cycle_pause_ms: u32,
    cycle_count: u64,
    last_rendered: Option<Severity>,
}

impl<R, P, D, W> IndicatorService<R, P, D, W>
where
    R: StatusRegistry,
    P: OutputPin,
    D: DelayNs,
    W: DelayNs,
{
    /// `led_delay` times the waveform; `pause` times the gap between cycles.
    pub fn new(config: &IndicatorConfig, registry: R, led: P, led_delay: D, pause: W) -> Self {
        Self {
            aggregator: HealthAggregator::new(registry),
            driver: SignalDriver::new(led, led_delay, config.protocol, config.timing),
            pause,
            cycle_pause_ms: config.cycle_pause_ms,
            cycle_count: 0,
            last_rendered: None,
        }
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run exactly one cycle and return the severity that was rendered.
    ///
    /// The pause runs even when the pin write fails, so a broken LED line
    /// cannot turn the loop into a busy spin.
    pub fn tick(&mut self) -> Result<Severity, P::Error> {
        self.cycle_count += 1;

        // 1. Aggregate — completes before any LED output.
        let severity = self.aggregator.operation_status();
        if self.last_rendered != Some(severity) {
            match SignalState::for_code(severity) {
                SignalState::Heartbeat => info!("status: healthy (cycle {})", self.cycle_count),
                SignalState::FaultBlink => {
                    info!("status: fault code {} (cycle {})", severity, self.cycle_count);
                }
            }
        }

        // 2. Render — runs to completion; later registry changes wait for the next cycle.
        let rendered = self.driver.render(severity);

        // 3. Pause.
        self.pause.delay_ms(self.cycle_pause_ms);

        rendered?;
        self.last_rendered = Some(severity);
        Ok(severity)
    }

    /// Loop forever. Render failures are logged and the next cycle proceeds.
    pub fn run(&mut self) -> ! {
        loop {
            if let Err(e) = self.tick() {
                error!("status: LED render failed: {:?}", e);
                self.last_rendered = None;
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    pub fn last_rendered(&self) -> Option<Severity> {
        self.last_rendered
    }
}
