//! Application layer: the cycle service and the port traits it consumes.

pub mod ports;
pub mod service;
