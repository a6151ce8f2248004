//! Platform abstraction traits
//!
//! Contracts the platform implementation must provide to the core.

pub mod storage;
pub mod uart;

// Re-export trait interfaces
pub use storage::{StorageFile, StorageInterface};
pub use uart::{UartConfig, UartInterface, UartParity, UartStopBits};
