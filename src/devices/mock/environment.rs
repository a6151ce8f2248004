//! Mock environment sensor for testing

use crate::devices::traits::EnvironmentSensor;
use crate::platform::{error::SensorError, PlatformError, Result};

/// Mock environment sensor
///
/// Returns values injected with [`set_sample`](MockEnvironmentSensor::set_sample).
/// Refuses to measure before `initialize`, so the never-initialized-peripheral
/// path of the acquisition task is testable.
#[derive(Debug, Default)]
pub struct MockEnvironmentSensor {
    initialized_at: Option<u8>,
    fail_init: bool,
    fail_readings: bool,
    reading_count: u32,
    temperature: f32,
    humidity: f32,
    pressure_pa: f32,
    gas_ohms: f32,
}

impl MockEnvironmentSensor {
    /// Create a new mock sensor reading all zeros
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject the values the next successful reading will capture
    pub fn set_sample(&mut self, temperature: f32, humidity: f32, pressure_pa: f32, gas_ohms: f32) {
        self.temperature = temperature;
        self.humidity = humidity;
        self.pressure_pa = pressure_pa;
        self.gas_ohms = gas_ohms;
    }

    /// Make `initialize` fail with `SensorError::InvalidChipId`
    pub fn set_fail_init(&mut self, fail: bool) {
        self.fail_init = fail;
    }

    /// Make `perform_reading` fail with `SensorError::ReadFailed`
    pub fn set_fail_readings(&mut self, fail: bool) {
        self.fail_readings = fail;
    }

    /// Bus address passed to `initialize`, if it succeeded
    pub fn initialized_at(&self) -> Option<u8> {
        self.initialized_at
    }

    /// Number of successful measurement cycles
    pub fn reading_count(&self) -> u32 {
        self.reading_count
    }
}

impl EnvironmentSensor for MockEnvironmentSensor {
    fn initialize(&mut self, address: u8) -> Result<()> {
        if self.fail_init {
            return Err(PlatformError::Sensor(SensorError::InvalidChipId));
        }
        self.initialized_at = Some(address);
        Ok(())
    }

    fn perform_reading(&mut self) -> Result<()> {
        if self.initialized_at.is_none() {
            return Err(PlatformError::Sensor(SensorError::NotInitialized));
        }
        if self.fail_readings {
            return Err(PlatformError::Sensor(SensorError::ReadFailed));
        }
        self.reading_count += 1;
        Ok(())
    }

    fn temperature(&self) -> f32 {
        self.temperature
    }

    fn humidity(&self) -> f32 {
        self.humidity
    }

    fn pressure(&self) -> f32 {
        self.pressure_pa
    }

    fn gas_resistance(&self) -> f32 {
        self.gas_ohms
    }
}
