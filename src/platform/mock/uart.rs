//! Mock UART implementation for testing

use crate::platform::{
    error::UartError,
    traits::{UartConfig, UartInterface},
    PlatformError, Result,
};
use core::cell::RefCell;
use std::vec::Vec;

/// Mock UART implementation
///
/// Provides in-memory buffers for transmit and receive data, allowing unit
/// tests to verify UART traffic without hardware. Receive data is injected
/// with [`MockUart::inject_rx_data`]; a read-failure toggle simulates a
/// faulted receiver.
///
/// # Example
///
/// ```ignore
/// use water_station::platform::mock::MockUart;
/// use water_station::platform::traits::UartInterface;
///
/// let mut uart = MockUart::new(Default::default());
/// uart.inject_rx_data(b"$GPGGA,...");
/// assert!(uart.available());
/// ```
#[derive(Debug)]
pub struct MockUart {
    config: UartConfig,
    tx_buffer: RefCell<Vec<u8>>,
    rx_buffer: RefCell<Vec<u8>>,
    fail_reads: bool,
}

impl MockUart {
    /// Create a new mock UART
    pub fn new(config: UartConfig) -> Self {
        Self {
            config,
            tx_buffer: RefCell::new(Vec::new()),
            rx_buffer: RefCell::new(Vec::new()),
            fail_reads: false,
        }
    }

    /// Get transmitted data (for test verification)
    pub fn tx_buffer(&self) -> Vec<u8> {
        self.tx_buffer.borrow().clone()
    }

    /// Inject receive data (for test setup)
    pub fn inject_rx_data(&mut self, data: &[u8]) {
        self.rx_buffer.borrow_mut().extend_from_slice(data);
    }

    /// Make subsequent `read` calls fail with `UartError::ReadFailed`
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Get the configured baud rate
    pub fn baud_rate(&self) -> u32 {
        self.config.baud_rate
    }
}

impl UartInterface for MockUart {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.tx_buffer.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        if self.fail_reads {
            return Err(PlatformError::Uart(UartError::ReadFailed));
        }

        let mut rx = self.rx_buffer.borrow_mut();
        let to_read = core::cmp::min(buffer.len(), rx.len());

        buffer[..to_read].copy_from_slice(&rx[..to_read]);
        rx.drain(..to_read);

        Ok(to_read)
    }

    fn available(&self) -> bool {
        !self.rx_buffer.borrow().is_empty()
    }

    fn flush(&mut self) -> Result<()> {
        // Nothing buffered on the transmit side to wait for
        Ok(())
    }
}
