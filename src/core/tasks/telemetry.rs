//! Telemetry encoder/transmitter task
//!
//! Serializes the radio summary from the shared state and hands it to the
//! transceiver in one blocking shot. There is deliberately no validity
//! gating: an invalid position transmits as its last-known (or zero) value,
//! and the receiving side gets the same six fields every period. A failed
//! transmit is reported and forgotten; the next period is the retry.

use crate::core::state::SensorState;
use crate::devices::traits::RadioInterface;
use core::fmt::Write;
use heapless::String;

/// Capacity of the payload buffer; sized well above the longest encoding
pub const TELEMETRY_PAYLOAD_CAPACITY: usize = 128;

/// Encode the compact JSON summary of the given state
///
/// Positions carry 6 decimals, everything else 1, the fixed wire precision
/// the ground side parses.
pub fn encode_payload(state: &SensorState) -> String<TELEMETRY_PAYLOAD_CAPACITY> {
    let mut payload = String::new();
    let _ = write!(
        payload,
        "{{\"lat\":{:.6},\"lon\":{:.6},\"alt\":{:.1},\"temp\":{:.1},\"hum\":{:.1},\"pres\":{:.1}}}",
        state.latitude,
        state.longitude,
        state.altitude,
        state.temperature,
        state.humidity,
        state.pressure
    );
    payload
}

/// Telemetry task
pub struct TelemetryTask<R: RadioInterface> {
    radio: R,
}

impl<R: RadioInterface> TelemetryTask<R> {
    /// Create the task over its transceiver
    pub fn new(radio: R) -> Self {
        Self { radio }
    }

    /// Get mutable access to the radio
    pub fn radio_mut(&mut self) -> &mut R {
        &mut self.radio
    }

    /// Encode and transmit one summary
    pub fn run(&mut self, state: &SensorState) {
        let payload = encode_payload(state);
        match self.radio.transmit(payload.as_bytes()) {
            Ok(()) => {
                crate::log_debug!("telemetry sent, {} bytes", payload.len());
            }
            Err(e) => {
                crate::log_warn!("radio transmit failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::mock::MockRadio;

    fn state_with_fix() -> SensorState {
        SensorState {
            latitude: 10.123456,
            longitude: 20.654321,
            altitude: 15.0,
            temperature: 23.4,
            humidity: 45.2,
            pressure: 1013.2,
            gps_fix: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_fixed_precision_formatting() {
        let payload = encode_payload(&state_with_fix());

        // Formatting law: 6 decimals for position, 1 for the rest
        assert!(payload.contains("10.123456"));
        assert!(payload.contains("20.654321"));
        assert!(payload.contains("15.0"));
        assert!(payload.contains("23.4"));
    }

    #[test]
    fn test_payload_layout() {
        let payload = encode_payload(&state_with_fix());
        assert_eq!(
            payload.as_str(),
            "{\"lat\":10.123456,\"lon\":20.654321,\"alt\":15.0,\"temp\":23.4,\"hum\":45.2,\"pres\":1013.2}"
        );
    }

    #[test]
    fn test_default_state_encodes_zeros() {
        // No validity gating: an empty state still produces a payload
        let payload = encode_payload(&SensorState::default());
        assert_eq!(
            payload.as_str(),
            "{\"lat\":0.000000,\"lon\":0.000000,\"alt\":0.0,\"temp\":0.0,\"hum\":0.0,\"pres\":0.0}"
        );
    }

    #[test]
    fn test_transmit_hands_payload_to_radio() {
        let mut radio = MockRadio::new();
        radio.initialize(915.0).unwrap();
        let mut task = TelemetryTask::new(radio);

        task.run(&state_with_fix());

        let sent = task.radio_mut().last_transmission_str().unwrap();
        assert!(sent.contains("\"lat\":10.123456"));
        assert_eq!(task.radio_mut().transmissions().len(), 1);
    }

    #[test]
    fn test_invalid_position_is_transmitted_anyway() {
        let mut radio = MockRadio::new();
        radio.initialize(915.0).unwrap();
        let mut task = TelemetryTask::new(radio);

        let mut state = state_with_fix();
        state.gps_fix = false;
        task.run(&state);

        // Last-known values go out regardless of the flag
        let sent = task.radio_mut().last_transmission_str().unwrap();
        assert!(sent.contains("10.123456"));
    }

    #[test]
    fn test_transmit_failure_recovers_next_period() {
        let mut radio = MockRadio::new();
        radio.initialize(915.0).unwrap();
        let mut task = TelemetryTask::new(radio);
        let state = state_with_fix();

        task.radio_mut().set_fail_transmits(true);
        task.run(&state);
        assert!(task.radio_mut().transmissions().is_empty());

        // No retry happened within the failed run; the next dispatch is it
        task.radio_mut().set_fail_transmits(false);
        task.run(&state);
        assert_eq!(task.radio_mut().transmissions().len(), 1);
    }

    #[test]
    fn test_uninitialized_radio_is_survivable() {
        let mut task = TelemetryTask::new(MockRadio::new());
        task.run(&state_with_fix());
        assert!(task.radio_mut().transmissions().is_empty());
    }
}
