//! Core trait abstractions
//!
//! Platform services the core consumes through traits so everything runs on
//! the host. Mock implementations live alongside the traits and are always
//! available.

pub mod time;

pub use time::{MockTime, TimeSource};
