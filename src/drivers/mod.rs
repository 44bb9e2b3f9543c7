//! Hardware initialisation and the sysfs GPIO driver.

pub mod hw_init;
pub mod sysfs_gpio;
