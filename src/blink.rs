//! Blink-code encoder and single-LED signal driver.
//!
//! Renders one [`Severity`] per cycle on a plain on/off LED.
//!
//! ## Signalling states
//!
//! | State       | Entered when | Waveform                                   |
//! |-------------|--------------|--------------------------------------------|
//! | Heartbeat   | code == 0    | high 100 ms, low (cycle pause does the rest)|
//! | FaultBlink  | code != 0    | 2 s low sync gap, then one symbol per bit   |
//!
//! Each bit becomes a [`BlinkSymbol`], most significant first:
//!
//! | Symbol | Bit | On     | Off    |
//! |--------|-----|--------|--------|
//! | Short  | 0   | 200 ms | 200 ms |
//! | Long   | 1   | 600 ms | 200 ms |
//!
//! Nothing carries over between cycles; every call to
//! [`SignalDriver::render`] starts from scratch.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// Widest code a sequence can carry.
pub const MAX_BIT_WIDTH: u8 = 32;

/// Rendering of a single bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkSymbol {
    /// Bit 0.
    Short,
    /// Bit 1.
    Long,
}

impl BlinkSymbol {
    pub const fn from_bit(bit: bool) -> Self {
        if bit { Self::Long } else { Self::Short }
    }
}

/// Symbols of one fault transmission, most significant bit first.
pub type BlinkSequence = heapless::Vec<BlinkSymbol, { MAX_BIT_WIDTH as usize }>;

/// Where the low sync gap goes around a fault sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncPlacement {
    /// One gap before the sequence.
    Leading,
    /// A gap before and another after the sequence.
    Both,
}

/// Shape of a fault transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlinkProtocol {
    /// Number of low-order bits transmitted. Higher bits are dropped.
    pub bit_width: u8,
    pub sync: SyncPlacement,
}

impl BlinkProtocol {
    /// Four bits, leading gap only.
    pub const CURRENT: Self = Self {
        bit_width: 4,
        sync: SyncPlacement::Leading,
    };

    /// The first-generation encoding: eight bits framed by two gaps.
    pub const LEGACY: Self = Self {
        bit_width: 8,
        sync: SyncPlacement::Both,
    };

    /// Encode the low `bit_width` bits of `code`, most significant first.
    pub fn encode(&self, code: Severity) -> BlinkSequence {
        let width = self.bit_width.min(MAX_BIT_WIDTH);
        (0..width).rev().map(|i| BlinkSymbol::from_bit(code.bit(i))).collect()
    }
}

impl Default for BlinkProtocol {
    fn default() -> Self {
        Self::CURRENT
    }
}

/// Encode with [`BlinkProtocol::CURRENT`]: always exactly four symbols.
pub fn encode(code: Severity) -> BlinkSequence {
    BlinkProtocol::CURRENT.encode(code)
}

/// LED on/off durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlinkTiming {
    pub heartbeat_on_ms: u32,
    pub short_on_ms: u32,
    pub long_on_ms: u32,
    /// Low time after every symbol.
    pub off_ms: u32,
    pub sync_gap_ms: u32,
}

impl Default for BlinkTiming {
    fn default() -> Self {
        Self {
            heartbeat_on_ms: 100,
            short_on_ms: 200,
            long_on_ms: 600,
            off_ms: 200,
            sync_gap_ms: 2000,
        }
    }
}

impl BlinkTiming {
    pub const fn on_time(&self, symbol: BlinkSymbol) -> u32 {
        match symbol {
            BlinkSymbol::Short => self.short_on_ms,
            BlinkSymbol::Long => self.long_on_ms,
        }
    }
}

/// Which waveform a code selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalState {
    Heartbeat,
    FaultBlink,
}

impl SignalState {
    pub const fn for_code(code: Severity) -> Self {
        if code.is_healthy() {
            Self::Heartbeat
        } else {
            Self::FaultBlink
        }
    }
}

/// Drives the status LED. Owns the pin exclusively.
pub struct SignalDriver<P, D> {
    pin: P,
    delay: D,
    protocol: BlinkProtocol,
    timing: BlinkTiming,
}

impl<P: OutputPin, D: DelayNs> SignalDriver<P, D> {
    pub fn new(pin: P, delay: D, protocol: BlinkProtocol, timing: BlinkTiming) -> Self {
        Self {
            pin,
            delay,
            protocol,
            timing,
        }
    }

    /// Emit one cycle's worth of output for `code`, blocking until done.
    pub fn render(&mut self, code: Severity) -> Result<SignalState, P::Error> {
        let state = SignalState::for_code(code);
        match state {
            SignalState::Heartbeat => self.heartbeat()?,
            SignalState::FaultBlink => self.fault_blink(code)?,
        }
        Ok(state)
    }

    /// High for `on_ms`, then low for the fixed inter-symbol gap.
    pub fn do_blink(&mut self, on_ms: u32) -> Result<(), P::Error> {
        self.pin.set_high()?;
        self.delay.delay_ms(on_ms);
        self.pin.set_low()?;
        self.delay.delay_ms(self.timing.off_ms);
        Ok(())
    }

    fn heartbeat(&mut self) -> Result<(), P::Error> {
        trace!("blink: heartbeat");
        self.pin.set_high()?;
        self.delay.delay_ms(self.timing.heartbeat_on_ms);
        self.pin.set_low()
    }

    fn fault_blink(&mut self, code: Severity) -> Result<(), P::Error> {
        let seq = self.protocol.encode(code);
        debug!("blink: code {} as {:?}", code, seq);

        self.sync_gap()?;
        for symbol in seq {
            let on_ms = self.timing.on_time(symbol);
            self.do_blink(on_ms)?;
        }
        if self.protocol.sync == SyncPlacement::Both {
            self.sync_gap()?;
        }
        Ok(())
    }

    fn sync_gap(&mut self) -> Result<(), P::Error> {
        self.pin.set_low()?;
        self.delay.delay_ms(self.timing.sync_gap_ms);
        Ok(())
    }
}
