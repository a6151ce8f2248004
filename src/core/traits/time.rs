//! Time abstraction for the scheduler loop
//!
//! The scheduler itself only consumes timestamps handed to `tick`; this
//! trait is what the outer run loop samples them from. A mock
//! implementation with controllable time is always available so
//! timing-dependent code tests deterministically.

use core::cell::Cell;

/// Monotonic time source
///
/// Implementations count from system start and never go backwards. The
/// firmware side wraps its hardware timer; tests use [`MockTime`].
pub trait TimeSource {
    /// Current time in milliseconds since system start
    fn now_ms(&self) -> u64;

    /// Current time in microseconds since system start
    fn now_us(&self) -> u64;

    /// Elapsed milliseconds since a reference point
    ///
    /// Saturates to zero if the reference is in the future.
    fn elapsed_since_ms(&self, reference_ms: u64) -> u64 {
        self.now_ms().saturating_sub(reference_ms)
    }
}

/// Mock time source with controllable time advancement
///
/// # Example
///
/// ```
/// use water_station::core::traits::{MockTime, TimeSource};
///
/// let time = MockTime::new();
/// assert_eq!(time.now_ms(), 0);
///
/// time.advance_ms(250);
/// assert_eq!(time.now_ms(), 250);
/// assert_eq!(time.now_us(), 250_000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTime {
    current_us: Cell<u64>,
}

impl MockTime {
    /// Create a new `MockTime` starting at time 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new `MockTime` starting at the given millisecond count
    pub fn with_initial_ms(ms: u64) -> Self {
        Self {
            current_us: Cell::new(ms * 1000),
        }
    }

    /// Set the current time to an absolute millisecond count
    pub fn set_ms(&self, ms: u64) {
        self.current_us.set(ms * 1000);
    }

    /// Advance the current time by the given milliseconds
    pub fn advance_ms(&self, ms: u64) {
        self.current_us.set(self.current_us.get() + ms * 1000);
    }

    /// Advance the current time by the given microseconds
    pub fn advance_us(&self, us: u64) {
        self.current_us.set(self.current_us.get() + us);
    }
}

impl TimeSource for MockTime {
    fn now_ms(&self) -> u64 {
        self.current_us.get() / 1000
    }

    fn now_us(&self) -> u64 {
        self.current_us.get()
    }
}
