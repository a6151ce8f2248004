//! Mock radio transceiver for testing

use crate::devices::traits::RadioInterface;
use crate::platform::{error::RadioError, PlatformError, Result};
use std::vec::Vec;

/// Mock radio transceiver
///
/// Records every transmitted payload for test verification. Refuses to
/// transmit before `initialize`, so an initialization failure at startup
/// surfaces as a per-tick transmit error exactly like a dead module would.
#[derive(Debug, Default)]
pub struct MockRadio {
    frequency_mhz: Option<f32>,
    fail_init: bool,
    fail_transmits: bool,
    transmissions: Vec<Vec<u8>>,
}

impl MockRadio {
    /// Create a new mock radio
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `initialize` fail with `RadioError::InitFailed`
    pub fn set_fail_init(&mut self, fail: bool) {
        self.fail_init = fail;
    }

    /// Make `transmit` fail with `RadioError::TransmitFailed`
    pub fn set_fail_transmits(&mut self, fail: bool) {
        self.fail_transmits = fail;
    }

    /// Carrier frequency passed to `initialize`, if it succeeded
    pub fn frequency_mhz(&self) -> Option<f32> {
        self.frequency_mhz
    }

    /// All successfully transmitted payloads, oldest first
    pub fn transmissions(&self) -> &[Vec<u8>] {
        &self.transmissions
    }

    /// The most recent payload as text (for payload format assertions)
    pub fn last_transmission_str(&self) -> Option<String> {
        self.transmissions
            .last()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl RadioInterface for MockRadio {
    fn initialize(&mut self, frequency_mhz: f32) -> Result<()> {
        if self.fail_init {
            return Err(PlatformError::Radio(RadioError::InitFailed));
        }
        self.frequency_mhz = Some(frequency_mhz);
        Ok(())
    }

    fn transmit(&mut self, payload: &[u8]) -> Result<()> {
        if self.frequency_mhz.is_none() {
            return Err(PlatformError::Radio(RadioError::NotInitialized));
        }
        if self.fail_transmits {
            return Err(PlatformError::Radio(RadioError::TransmitFailed));
        }
        self.transmissions.push(payload.to_vec());
        Ok(())
    }
}
