//! Mock display for testing

use crate::devices::traits::{DisplayFrame, DisplayInterface};
use crate::platform::{error::DisplayError, PlatformError, Result};
use std::vec::Vec;

/// Mock display
///
/// Records every rendered frame for test verification.
#[derive(Debug, Default)]
pub struct MockDisplay {
    fail_renders: bool,
    frames: Vec<DisplayFrame>,
}

impl MockDisplay {
    /// Create a new mock display
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `render` fail with `DisplayError::RenderFailed`
    pub fn set_fail_renders(&mut self, fail: bool) {
        self.fail_renders = fail;
    }

    /// All rendered frames, oldest first
    pub fn frames(&self) -> &[DisplayFrame] {
        &self.frames
    }

    /// The most recently rendered frame
    pub fn last_frame(&self) -> Option<&DisplayFrame> {
        self.frames.last()
    }
}

impl DisplayInterface for MockDisplay {
    fn render(&mut self, frame: &DisplayFrame) -> Result<()> {
        if self.fail_renders {
            return Err(PlatformError::Display(DisplayError::RenderFailed));
        }
        self.frames.push(*frame);
        Ok(())
    }
}
