//! Device layer
//!
//! The concrete GPS receiver (NMEA over UART) plus the device-level
//! collaborator contracts the station tasks consume. Register-level drivers
//! for the environment sensor, radio, storage medium and display live with
//! the target firmware and plug in through the traits here.

pub mod gps;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;
