//! Port traits — the boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ IndicatorService (domain)
//! ```
//!
//! The LED side needs no port of its own: it is expressed with the
//! `embedded_hal` `OutputPin` and `DelayNs` traits, which the sysfs and
//! thread-sleep adapters implement.

use core::fmt;

use crate::health::StatusRecord;

// ───────────────────────────────────────────────────────────────
// Status registry port (driven adapter: filesystem → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port over the externally written status records.
///
/// Implementations are strictly read-only: they never create, modify, or
/// remove records.
pub trait StatusRegistry {
    /// Open the registry and return every record it currently holds.
    ///
    /// `Err` means the registry itself could not be opened. Per-record
    /// failures are reported inside the returned records instead.
    fn scan(&self) -> Result<Vec<StatusRecord>, RegistryError>;
}

impl<T: StatusRegistry + ?Sized> StatusRegistry for &T {
    fn scan(&self) -> Result<Vec<StatusRecord>, RegistryError> {
        (**self).scan()
    }
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`StatusRegistry::scan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// The registry does not exist.
    NotFound,
    /// The registry exists but could not be opened (raw OS errno).
    Unreadable(i32),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "status registry not found"),
            Self::Unreadable(errno) => write!(f, "status registry unreadable (errno={})", errno),
        }
    }
}
