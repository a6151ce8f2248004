//! Radio transceiver trait
//!
//! Contract for the low-power radio link (a LoRa transceiver in the field
//! unit). Modulation and PHY configuration are the driver's concern; the
//! core hands over one payload per telemetry period and treats a failed
//! transmit as recoverable: the next period is the only retry.

use crate::platform::Result;

/// Radio transceiver interface
pub trait RadioInterface {
    /// Bring up the transceiver on the given carrier frequency (MHz)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Radio` if the module does not respond or the
    /// frequency is out of range.
    fn initialize(&mut self, frequency_mhz: f32) -> Result<()>;

    /// Transmit one payload, blocking until the air time is over
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Radio` if the transceiver was never
    /// initialized or the transmission did not complete.
    fn transmit(&mut self, payload: &[u8]) -> Result<()>;
}
