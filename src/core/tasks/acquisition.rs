//! Sensor acquisition task
//!
//! Pulls fresh values from the positioning receiver and the environment
//! sensor into the shared state. Each source fails independently: a
//! receiver without a fix drops the validity flag but keeps the old
//! position, and a failed environment reading leaves all four fields
//! untouched (last-known-good). The timestamp is stamped on every run,
//! marking the last *attempt*.

use crate::core::state::SensorState;
use crate::devices::gps::GpsReceiver;
use crate::devices::traits::EnvironmentSensor;
use crate::platform::traits::UartInterface;

/// Pascals per hectopascal
const PA_PER_HPA: f32 = 100.0;
/// Ohms per kilo-ohm
const OHMS_PER_KOHM: f32 = 1000.0;

/// Sensor acquisition task
pub struct AcquisitionTask<U: UartInterface, E: EnvironmentSensor> {
    gps: GpsReceiver<U>,
    env: E,
}

impl<U: UartInterface, E: EnvironmentSensor> AcquisitionTask<U, E> {
    /// Create the task over its two collaborators
    pub fn new(gps: GpsReceiver<U>, env: E) -> Self {
        Self { gps, env }
    }

    /// Get mutable access to the GPS receiver
    pub fn gps_mut(&mut self) -> &mut GpsReceiver<U> {
        &mut self.gps
    }

    /// Get mutable access to the environment sensor
    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }

    /// Run one acquisition cycle
    pub fn run(&mut self, now_ms: u64, state: &mut SensorState) {
        // Drain whatever the receiver buffered since the last cycle, then
        // judge the fix on the parser's merged result
        if let Err(e) = self.gps.poll() {
            crate::log_warn!("gps read failed: {}", e);
        }

        if self.gps.has_valid_fix() {
            state.latitude = self.gps.latitude();
            state.longitude = self.gps.longitude();
            state.altitude = self.gps.altitude();
            state.velocity = self.gps.speed_kmh();
            state.gps_fix = true;
        } else {
            // Stale position stays in place; the flag says it is not current
            state.gps_fix = false;
        }

        match self.env.perform_reading() {
            Ok(()) => {
                state.temperature = self.env.temperature();
                state.humidity = self.env.humidity();
                state.pressure = self.env.pressure() / PA_PER_HPA;
                state.gas_resistance = self.env.gas_resistance() / OHMS_PER_KOHM;
            }
            Err(e) => {
                crate::log_warn!("environment read failed: {}", e);
            }
        }

        // Last attempted, not last successful
        state.timestamp_ms = now_ms;
    }
}
