//! Platform abstraction layer
//!
//! Narrow contracts for the byte-stream and storage peripherals the core
//! consumes, plus the shared error taxonomy. Concrete implementations live
//! with the target firmware; the mock implementations here back the host
//! tests.

pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{StorageFile, StorageInterface, UartConfig, UartInterface};
