//! UART interface trait
//!
//! Byte-stream contract consumed by the GPS receiver. The positioning module
//! pushes NMEA sentences over a serial port; the core only ever drains
//! whatever the port has buffered and never blocks waiting for more.

use crate::platform::Result;

/// UART parity setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UartParity {
    None,
    Even,
    Odd,
}

/// UART stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UartStopBits {
    One,
    Two,
}

/// UART configuration
#[derive(Debug, Clone, Copy)]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baud_rate: u32,
    /// Data bits per frame (typically 8)
    pub data_bits: u8,
    /// Stop bits
    pub stop_bits: UartStopBits,
    /// Parity
    pub parity: UartParity,
}

impl Default for UartConfig {
    fn default() -> Self {
        // 9600 8N1, the standard NMEA output configuration
        Self {
            baud_rate: 9600,
            data_bits: 8,
            stop_bits: UartStopBits::One,
            parity: UartParity::None,
        }
    }
}

/// UART interface trait
///
/// Platform implementations provide this for serial communication. All
/// operations are synchronous with bounded latency; `read` returns whatever
/// is currently buffered and never waits for additional bytes.
pub trait UartInterface {
    /// Write data to the port
    ///
    /// Returns the number of bytes accepted.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart` if the transmitter rejects the data.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Read buffered data from the port
    ///
    /// Copies up to `buffer.len()` already-received bytes and returns the
    /// count. A return of 0 means the receive buffer is empty, not that the
    /// stream has ended.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart` if the receiver is in a fault state.
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize>;

    /// Check whether received data is waiting to be read
    fn available(&self) -> bool;

    /// Block until all queued transmit data has left the port
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart` if the transmitter faults while
    /// draining.
    fn flush(&mut self) -> Result<()>;
}
