//! Shared sensor state
//!
//! The single record every task reads and the acquisition task writes. The
//! station owns it and lends it to whichever task is currently dispatched;
//! because dispatch is strictly sequential there is never concurrent
//! access.

/// Latest known readings from every collaborator plus derived system fields
///
/// Field retention is last-known-good throughout: a failed read leaves the
/// previous value in place. Position fields are only current when
/// `gps_fix` is true; when it is false they hold the last fix, which
/// consumers must treat as stale. `timestamp_ms` marks the last
/// acquisition *attempt*, not the last success.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorState {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Altitude in meters
    pub altitude: f32,
    /// Ground speed in km/h
    pub velocity: f32,
    /// Whether the position fields are backed by a current fix
    pub gps_fix: bool,

    /// Temperature in degrees Celsius
    pub temperature: f32,
    /// Relative humidity in percent
    pub humidity: f32,
    /// Barometric pressure in hPa
    pub pressure: f32,
    /// Gas sensor resistance in kOhm
    pub gas_resistance: f32,

    /// Battery charge in percent (not populated at this layer)
    pub battery_percent: f32,
    /// Monotonic milliseconds since boot at the last acquisition attempt
    pub timestamp_ms: u64,
    /// Last link-quality indicator in dBm (not populated at this layer)
    pub radio_rssi: i16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_zero_and_invalid() {
        let state = SensorState::default();
        assert_eq!(state.latitude, 0.0);
        assert_eq!(state.temperature, 0.0);
        assert_eq!(state.timestamp_ms, 0);
        assert!(!state.gps_fix);
    }
}
