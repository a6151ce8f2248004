//! Display refresh task
//!
//! Projects a read-only snapshot of the shared state onto the status
//! display. Rendering itself is the display driver's concern; this task
//! only selects the fields the panel shows and never writes to the state.

use crate::core::state::SensorState;
use crate::devices::traits::{DisplayFrame, DisplayInterface};

/// Display task
pub struct DisplayTask<D: DisplayInterface> {
    display: D,
}

impl<D: DisplayInterface> DisplayTask<D> {
    /// Create the task over its display
    pub fn new(display: D) -> Self {
        Self { display }
    }

    /// Get mutable access to the display
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Refresh the display from the current state
    pub fn run(&mut self, state: &SensorState) {
        let frame = DisplayFrame {
            altitude: state.altitude,
            velocity: state.velocity,
            temperature: state.temperature,
            gps_fix: state.gps_fix,
            battery_percent: state.battery_percent,
        };

        if let Err(e) = self.display.render(&frame) {
            crate::log_warn!("display render failed: {}", e);
        }
    }
}
