//! Aggregate health code shared by the aggregator and the signal driver.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Aggregate operational health. `0` is healthy, anything else a fault
/// magnitude. Recomputed every cycle, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Severity(u32);

impl Severity {
    /// Healthy.
    pub const OK: Self = Self(0);

    /// Reported when the status registry or one of its records cannot be
    /// read. Shares the all-ones pattern of a 4-bit code so existing
    /// observers decode it as 15.
    pub const UNREADABLE: Self = Self(15);

    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    pub const fn code(self) -> u32 {
        self.0
    }

    pub const fn is_healthy(self) -> bool {
        self.0 == 0
    }

    /// Bit `index` of the code (0 = least significant). Bits past 31 read as 0.
    pub const fn bit(self, index: u8) -> bool {
        index < 32 && (self.0 >> index) & 1 == 1
    }

    /// Clamp a parsed record value: negatives contribute nothing, values
    /// past `u32::MAX` saturate.
    pub fn from_record_value(value: i64) -> Self {
        Self(value.clamp(0, i64::from(u32::MAX)) as u32)
    }
}

impl From<u32> for Severity {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
