//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter      | Implements       | Connects to                 |
//! |--------------|------------------|-----------------------------|
//! | `status_dir` | StatusRegistry   | `/tmp/status/` text files   |
//! | `time`       | DelayNs          | `std::thread::sleep`        |
//!
//! The LED pin adapter lives in [`crate::drivers::sysfs_gpio`].

pub mod status_dir;
pub mod time;
