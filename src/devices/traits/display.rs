//! Status display trait
//!
//! Reserved contract for the on-board display. The display task projects a
//! read-only snapshot of the sensor state; how the frame is rendered is
//! entirely the display driver's concern.

use crate::platform::Result;

/// One frame of status data for the display
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayFrame {
    /// Altitude in meters
    pub altitude: f32,
    /// Ground speed in km/h
    pub velocity: f32,
    /// Temperature in degrees Celsius
    pub temperature: f32,
    /// Whether the position data is backed by a current fix
    pub gps_fix: bool,
    /// Battery charge in percent
    pub battery_percent: f32,
}

/// Display interface
pub trait DisplayInterface {
    /// Render one status frame
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Display` if the panel rejects the frame.
    fn render(&mut self, frame: &DisplayFrame) -> Result<()>;
}
