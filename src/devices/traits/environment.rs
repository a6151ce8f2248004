//! Environment sensor trait
//!
//! Contract for the combined temperature/humidity/pressure/gas sensor
//! (a BME68x-class device on the sensor bus). The driver owns the
//! measurement cycle; the core only triggers a reading and copies the
//! results. Accessors return raw device units (pascals and ohms) and the
//! acquisition task converts to the station's hPa/kΩ convention.

use crate::platform::Result;

/// Environment sensor interface
///
/// Accessors return the values captured by the most recent successful
/// [`perform_reading`](EnvironmentSensor::perform_reading); after a failed
/// reading they keep returning the previous capture.
pub trait EnvironmentSensor {
    /// Probe and configure the sensor at the given bus address
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Sensor` if the device does not respond or
    /// identifies as something else.
    fn initialize(&mut self, address: u8) -> Result<()>;

    /// Run one complete measurement cycle
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Sensor` if the sensor was never initialized
    /// or the measurement did not complete.
    fn perform_reading(&mut self) -> Result<()>;

    /// Temperature in degrees Celsius
    fn temperature(&self) -> f32;

    /// Relative humidity in percent
    fn humidity(&self) -> f32;

    /// Barometric pressure in pascals
    fn pressure(&self) -> f32;

    /// Gas sensor resistance in ohms
    fn gas_resistance(&self) -> f32;
}
