//! Device-level collaborator traits
//!
//! Narrow contracts for the peripherals whose internals are outside the
//! core: environment sensor, radio transceiver and status display.

pub mod display;
pub mod environment;
pub mod radio;

pub use display::{DisplayFrame, DisplayInterface};
pub use environment::EnvironmentSensor;
pub use radio::RadioInterface;
