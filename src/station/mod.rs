//! Station composition root
//!
//! Wires the scheduler, the shared sensor state and the four periodic
//! tasks over their collaborator interfaces. The station owns everything;
//! each tick lends the state to the dispatched task for exactly one run.
//!
//! Cadences are fixed: acquisition at 10 Hz, display at 5 Hz, telemetry
//! and logging at 1 Hz.

use crate::core::scheduler::{Scheduler, TaskId};
use crate::core::state::SensorState;
use crate::core::tasks::{AcquisitionTask, DisplayTask, LoggerTask, TelemetryTask};
use crate::core::traits::TimeSource;
use crate::devices::gps::GpsReceiver;
use crate::devices::traits::{DisplayInterface, EnvironmentSensor, RadioInterface};
use crate::platform::traits::{StorageInterface, UartInterface};

/// Sensor acquisition period (10 Hz)
pub const ACQUISITION_PERIOD_MS: u64 = 100;
/// Radio telemetry period (1 Hz)
pub const TELEMETRY_PERIOD_MS: u64 = 1000;
/// Storage log period (1 Hz)
pub const LOG_PERIOD_MS: u64 = 1000;
/// Display refresh period (5 Hz)
pub const DISPLAY_PERIOD_MS: u64 = 200;

/// Radio carrier frequency in MHz
pub const RADIO_FREQUENCY_MHZ: f32 = 915.0;
/// Environment sensor bus address
pub const ENV_SENSOR_ADDR: u8 = 0x77;

/// The field telemetry unit
///
/// Generic over the five collaborator interfaces, so the same composition
/// runs against hardware drivers in firmware and against the mock layer in
/// tests.
pub struct Station<U, E, R, S, D>
where
    U: UartInterface,
    E: EnvironmentSensor,
    R: RadioInterface,
    S: StorageInterface,
    D: DisplayInterface,
{
    scheduler: Scheduler,
    state: SensorState,
    acquisition: AcquisitionTask<U, E>,
    telemetry: TelemetryTask<R>,
    logger: LoggerTask<S>,
    display: DisplayTask<D>,
}

impl<U, E, R, S, D> Station<U, E, R, S, D>
where
    U: UartInterface,
    E: EnvironmentSensor,
    R: RadioInterface,
    S: StorageInterface,
    D: DisplayInterface,
{
    /// Assemble the station from its collaborators
    ///
    /// Tasks register in fixed priority order: acquisition, telemetry,
    /// logger, display.
    pub fn new(gps_uart: U, env: E, radio: R, storage: S, display: D) -> Self {
        let mut scheduler = Scheduler::new();
        scheduler.register(TaskId::Acquisition, ACQUISITION_PERIOD_MS);
        scheduler.register(TaskId::Telemetry, TELEMETRY_PERIOD_MS);
        scheduler.register(TaskId::Logger, LOG_PERIOD_MS);
        scheduler.register(TaskId::Display, DISPLAY_PERIOD_MS);

        Self {
            scheduler,
            state: SensorState::default(),
            acquisition: AcquisitionTask::new(GpsReceiver::new(gps_uart), env),
            telemetry: TelemetryTask::new(radio),
            logger: LoggerTask::new(storage),
            display: DisplayTask::new(display),
        }
    }

    /// Run the one-shot peripheral initializations
    ///
    /// Failures are reported and the affected task stays registered: its
    /// per-tick collaborator calls keep failing defensively until the
    /// peripheral recovers, and nothing else is held up.
    pub fn init_peripherals(&mut self) {
        if let Err(e) = self.acquisition.env_mut().initialize(ENV_SENSOR_ADDR) {
            crate::log_error!("environment sensor init failed: {}", e);
        }
        if let Err(e) = self.telemetry.radio_mut().initialize(RADIO_FREQUENCY_MHZ) {
            crate::log_error!("radio init failed: {}", e);
        }
        crate::log_info!("station initialized");
    }

    /// Run one scheduler tick at the given time
    ///
    /// Dispatches every due task in priority order, each with exclusive
    /// access to the sensor state for the duration of its run. Only the
    /// acquisition task writes; the others read.
    pub fn tick(&mut self, now_ms: u64) {
        let Self {
            scheduler,
            state,
            acquisition,
            telemetry,
            logger,
            display,
        } = self;

        scheduler.tick(now_ms, |id| match id {
            TaskId::Acquisition => acquisition.run(now_ms, state),
            TaskId::Telemetry => telemetry.run(state),
            TaskId::Logger => logger.run(state),
            TaskId::Display => display.run(state),
        });
    }

    /// Tick forever against a time source
    pub fn run<T: TimeSource>(&mut self, time: &T) -> ! {
        loop {
            self.tick(time.now_ms());
        }
    }

    /// Read-only view of the shared sensor state
    pub fn state(&self) -> &SensorState {
        &self.state
    }

    /// Read-only view of the scheduler table
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Get mutable access to the acquisition task
    pub fn acquisition_mut(&mut self) -> &mut AcquisitionTask<U, E> {
        &mut self.acquisition
    }

    /// Get mutable access to the telemetry task
    pub fn telemetry_mut(&mut self) -> &mut TelemetryTask<R> {
        &mut self.telemetry
    }

    /// Get mutable access to the logger task
    pub fn logger_mut(&mut self) -> &mut LoggerTask<S> {
        &mut self.logger
    }

    /// Get mutable access to the display task
    pub fn display_mut(&mut self) -> &mut DisplayTask<D> {
        &mut self.display
    }
}
