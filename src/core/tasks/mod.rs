//! Periodic station tasks
//!
//! One module per task, each a struct owning its collaborators with a
//! bounded-time `run` the scheduler dispatches. Tasks receive the shared
//! [`SensorState`](crate::core::state::SensorState) by reference for the
//! duration of one dispatch and never keep it.

pub mod acquisition;
pub mod display;
pub mod logger;
pub mod telemetry;

pub use acquisition::AcquisitionTask;
pub use display::DisplayTask;
pub use logger::LoggerTask;
pub use telemetry::TelemetryTask;
