//! GPS receiver (NMEA protocol)
//!
//! The positioning collaborator: drains the UART byte stream through a pull
//! parser and merges the sentence types the station cares about into one
//! last-known fix.
//!
//! - **GGA**: position, altitude and satellite count; a fixless GGA demotes
//!   the fix
//! - **RMC**: ground speed; a void RMC demotes the fix
//! - **VTG**: ground speed (backup source)
//!
//! Demoting the fix never clears the merged values; the acquisition task
//! decides what a stale position is worth.
//!
//! # Example
//!
//! ```ignore
//! use water_station::devices::gps::GpsReceiver;
//! use water_station::platform::mock::MockUart;
//! use water_station::platform::traits::UartInterface;
//!
//! let mut uart = MockUart::new(Default::default());
//! uart.inject_rx_data(b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n");
//!
//! let mut gps = GpsReceiver::new(uart);
//! gps.poll().unwrap();
//! assert!(gps.has_valid_fix());
//! ```

use crate::platform::{traits::UartInterface, Result};
use nmea0183::{ParseResult, Parser};

/// Conversion factor from knots to km/h
const KNOTS_TO_KMH: f32 = 1.852;

/// GPS fix type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpsFixType {
    /// No fix
    #[default]
    NoFix,
    /// 2D fix (latitude, longitude only)
    Fix2D,
    /// 3D fix (latitude, longitude, altitude)
    Fix3D,
}

/// Last-known fix assembled from multiple sentence types
#[derive(Debug, Clone, Copy, Default)]
struct FixData {
    /// Latitude in degrees, from GGA
    latitude: Option<f64>,
    /// Longitude in degrees, from GGA
    longitude: Option<f64>,
    /// Altitude in meters, from GGA
    altitude: Option<f32>,
    /// Ground speed in km/h, from RMC or VTG
    speed_kmh: Option<f32>,
    /// Satellites used in the fix, from GGA
    satellites: Option<u8>,
    /// Fix quality derived from GGA
    fix_type: GpsFixType,
}

impl FixData {
    fn update_from_gga(&mut self, gga: &nmea0183::GGA) {
        self.latitude = Some(gga.latitude.as_f64());
        self.longitude = Some(gga.longitude.as_f64());
        self.altitude = gga.altitude.as_ref().map(|a| a.meters);
        self.satellites = Some(gga.sat_in_use);

        // A usable altitude marks the fix as 3D
        self.fix_type = if self
            .altitude
            .map(|meters| meters.abs() > 0.01)
            .unwrap_or(false)
        {
            GpsFixType::Fix3D
        } else {
            GpsFixType::Fix2D
        };
    }

    fn update_from_rmc(&mut self, rmc: &nmea0183::RMC) {
        self.speed_kmh = Some(rmc.speed.as_knots() * KNOTS_TO_KMH);
    }

    fn update_from_vtg(&mut self, vtg: &nmea0183::VTG) {
        self.speed_kmh = Some(vtg.speed.as_knots() * KNOTS_TO_KMH);
    }

    /// The receiver reported a sentence without a fix; keep the merged
    /// values but stop presenting them as current.
    fn demote(&mut self) {
        self.fix_type = GpsFixType::NoFix;
    }
}

/// GPS receiver
///
/// Generic over any [`UartInterface`], so the same receiver runs against
/// real hardware and against [`MockUart`](crate::platform::mock::MockUart)
/// in tests.
pub struct GpsReceiver<U: UartInterface> {
    uart: U,
    parser: Parser,
    fix: FixData,
}

impl<U: UartInterface> GpsReceiver<U> {
    /// Create a new receiver over the given UART
    pub fn new(uart: U) -> Self {
        Self {
            uart,
            parser: Parser::new(),
            fix: FixData::default(),
        }
    }

    /// Get mutable access to the underlying UART
    pub fn uart_mut(&mut self) -> &mut U {
        &mut self.uart
    }

    /// Push one protocol byte through the sentence parser
    ///
    /// Complete sentences update the merged fix; malformed or checksum-bad
    /// sentences are discarded and the parser resynchronizes on the next
    /// `$`.
    pub fn feed(&mut self, byte: u8) {
        if let Some(result) = self.parser.parse_from_byte(byte) {
            match result {
                Ok(ParseResult::GGA(Some(gga))) => self.fix.update_from_gga(&gga),
                Ok(ParseResult::RMC(Some(rmc))) => self.fix.update_from_rmc(&rmc),
                Ok(ParseResult::VTG(Some(vtg))) => self.fix.update_from_vtg(&vtg),
                // Sentence parsed but carries no fix
                Ok(ParseResult::GGA(None)) | Ok(ParseResult::RMC(None)) => self.fix.demote(),
                // Other sentence types are not interesting
                Ok(_) => {}
                // Garbled sentence; parser picks up at the next '$'
                Err(_) => {}
            }
        }
    }

    /// Drain everything the UART has buffered through the parser
    ///
    /// Returns once the receive buffer is empty. Never waits for more
    /// bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the UART read fails; bytes consumed before the
    /// failure have already been parsed.
    pub fn poll(&mut self) -> Result<()> {
        let mut buf = [0u8; 64];
        while self.uart.available() {
            let count = self.uart.read(&mut buf)?;
            if count == 0 {
                break;
            }
            for &byte in &buf[..count] {
                self.feed(byte);
            }
        }
        Ok(())
    }

    /// Whether the merged state is backed by a current fix
    pub fn has_valid_fix(&self) -> bool {
        self.fix.fix_type != GpsFixType::NoFix
            && self.fix.latitude.is_some()
            && self.fix.longitude.is_some()
    }

    /// Fix quality of the last position sentence
    pub fn fix_type(&self) -> GpsFixType {
        self.fix.fix_type
    }

    /// Latitude in degrees (0.0 before the first fix)
    pub fn latitude(&self) -> f64 {
        self.fix.latitude.unwrap_or(0.0)
    }

    /// Longitude in degrees (0.0 before the first fix)
    pub fn longitude(&self) -> f64 {
        self.fix.longitude.unwrap_or(0.0)
    }

    /// Altitude in meters (0.0 before the first 3D fix)
    pub fn altitude(&self) -> f32 {
        self.fix.altitude.unwrap_or(0.0)
    }

    /// Ground speed in km/h (0.0 before the first RMC/VTG)
    pub fn speed_kmh(&self) -> f32 {
        self.fix.speed_kmh.unwrap_or(0.0)
    }

    /// Satellites used in the fix (0 before the first GGA)
    pub fn satellites(&self) -> u8 {
        self.fix.satellites.unwrap_or(0)
    }
}
