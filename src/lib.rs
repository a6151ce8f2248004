#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! water_station - field telemetry unit core
//!
//! This library contains the cooperative periodic scheduler, the shared
//! sensor-state model and the four station tasks (sensor acquisition, radio
//! telemetry, storage logging, display refresh) for a single-board field
//! telemetry unit. Peripheral drivers are consumed through narrow
//! collaborator traits so the whole core runs and tests on the host.

// Platform abstraction layer (UART/storage contracts, error taxonomy)
pub mod platform;

// Device drivers and device-level collaborator contracts
pub mod devices;

// Core systems: sensor state, scheduler, tasks, logging, time
pub mod core;

// Composition root wiring scheduler, state and tasks together
pub mod station;
