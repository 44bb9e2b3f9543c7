//! GPIO pin assignments for the Quark carrier board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers. Numbers are Linux sysfs GPIO numbers.

// ---------------------------------------------------------------------------
// Status LED
// ---------------------------------------------------------------------------

/// Digital output driving the status LED (active HIGH).
pub const STATUS_LED_GPIO: u32 = 7;

// ---------------------------------------------------------------------------
// I/O expander multiplexer
// ---------------------------------------------------------------------------

/// I/O expander MUX select 1. Must be driven LOW to route the LED line.
pub const IO_EXP_MUX_SEL1_GPIO: u32 = 30;
/// I/O expander MUX select 2. Must be driven LOW to route the LED line.
pub const IO_EXP_MUX_SEL2_GPIO: u32 = 31;
/// Quark SoC GPIO 46, part of the same MUX routing.
pub const QUARK_GPIO_46: u32 = 46;

/// Every MUX select line, in the order they are configured at boot.
pub const MUX_SELECT_GPIOS: [u32; 3] = [IO_EXP_MUX_SEL1_GPIO, IO_EXP_MUX_SEL2_GPIO, QUARK_GPIO_46];

// ---------------------------------------------------------------------------
// sysfs
// ---------------------------------------------------------------------------

/// Root of the legacy sysfs GPIO interface.
pub const SYSFS_GPIO_ROOT: &str = "/sys/class/gpio";
