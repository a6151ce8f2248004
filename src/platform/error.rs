//! Platform error types
//!
//! Collaborator implementations map their device-specific failures to these
//! variants. No failure here is fatal to the station: task bodies report the
//! error and rely on the next periodic dispatch as the only retry.

use core::fmt;

/// Result type for collaborator operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Top-level error for all collaborator operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformError {
    /// UART operation failed
    Uart(UartError),
    /// Storage operation failed
    Storage(StorageError),
    /// Radio operation failed
    Radio(RadioError),
    /// Environment sensor operation failed
    Sensor(SensorError),
    /// Display operation failed
    Display(DisplayError),
    /// Peripheral initialization failed
    InitializationFailed,
    /// Invalid configuration provided
    InvalidConfig,
}

/// UART-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartError {
    /// Read operation failed
    ReadFailed,
    /// Write operation failed
    WriteFailed,
    /// Receive buffer overrun
    Overrun,
    /// Timeout occurred
    Timeout,
}

/// Storage-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// File could not be opened
    OpenFailed,
    /// Write to an open file failed
    WriteFailed,
    /// Medium not present or not mounted
    NotMounted,
}

/// Radio-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioError {
    /// Transceiver was never initialized
    NotInitialized,
    /// Transceiver initialization failed
    InitFailed,
    /// Transmit did not complete
    TransmitFailed,
    /// Requested carrier frequency is out of range
    InvalidFrequency,
}

/// Environment-sensor-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor was never initialized
    NotInitialized,
    /// Measurement cycle failed
    ReadFailed,
    /// Device at the given address is not the expected sensor
    InvalidChipId,
}

/// Display-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Display was never initialized
    NotInitialized,
    /// Frame could not be rendered
    RenderFailed,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Uart(e) => write!(f, "UART error: {:?}", e),
            PlatformError::Storage(e) => write!(f, "storage error: {:?}", e),
            PlatformError::Radio(e) => write!(f, "radio error: {:?}", e),
            PlatformError::Sensor(e) => write!(f, "sensor error: {:?}", e),
            PlatformError::Display(e) => write!(f, "display error: {:?}", e),
            PlatformError::InitializationFailed => write!(f, "peripheral initialization failed"),
            PlatformError::InvalidConfig => write!(f, "invalid configuration"),
        }
    }
}
