//! Mock platform implementations for testing
//!
//! In-memory implementations of the platform traits so the core can be unit
//! tested without hardware.
//!
//! # Feature Gate
//!
//! Available during test builds and when the `mock` feature is enabled
//! (the `mock` feature links std for the buffer types used here).

#![cfg(any(test, feature = "mock"))]

mod storage;
mod uart;

pub use storage::{MockStorage, MockStorageFile};
pub use uart::MockUart;
