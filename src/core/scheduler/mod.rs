//! Cooperative periodic task scheduler
//!
//! A fixed table of task descriptors dispatched from a single tick loop.
//! Each descriptor carries a period and the timestamp of its last dispatch;
//! a task is due when `now - last_dispatch >= period`, and dispatching
//! resets the reference to `now`, not to `last_dispatch + period`, so a
//! long-running task body shifts every later boundary. That drift is a
//! property of the design, not corrected.
//!
//! Dispatch order is registration order, which the station uses as the
//! fixed priority order. Execution is strictly sequential: a task body that
//! takes long delays every later task's due check for this tick and all
//! following ticks, so bodies must be bounded-time.

use heapless::Vec;

/// Maximum number of tasks the table can hold
pub const MAX_TASKS: usize = 8;

/// Identity of a periodic station task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaskId {
    /// Pull fresh sensor values into the shared state
    Acquisition,
    /// Encode and transmit the radio summary
    Telemetry,
    /// Append one record to the storage log
    Logger,
    /// Refresh the status display
    Display,
}

impl TaskId {
    /// Human-readable task name for logging
    pub fn name(&self) -> &'static str {
        match self {
            TaskId::Acquisition => "acquisition",
            TaskId::Telemetry => "telemetry",
            TaskId::Logger => "logger",
            TaskId::Display => "display",
        }
    }
}

/// Descriptor for one registered task
#[derive(Debug, Clone, Copy)]
pub struct TaskSlot {
    /// Task identity
    pub id: TaskId,
    /// Nominal period in milliseconds
    pub period_ms: u64,
    /// Tick time of the last dispatch; `None` until the first dispatch,
    /// which is therefore immediate
    pub last_dispatch_ms: Option<u64>,
    /// Total number of dispatches
    pub dispatch_count: u32,
}

impl TaskSlot {
    fn is_due(&self, now_ms: u64) -> bool {
        match self.last_dispatch_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.period_ms,
        }
    }
}

/// Periodic task scheduler
///
/// Owned by the station; holds descriptors only. The actual task bodies
/// stay with their owner and are invoked through the dispatch callback, so
/// the scheduler never holds a reference into the tasks or the sensor
/// state.
#[derive(Debug, Default)]
pub struct Scheduler {
    slots: Vec<TaskSlot, MAX_TASKS>,
}

impl Scheduler {
    /// Create an empty scheduler
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task with the given period
    ///
    /// Registration order is dispatch order. Call this once per task during
    /// single-threaded startup.
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_TASKS`] tasks are registered.
    pub fn register(&mut self, id: TaskId, period_ms: u64) {
        if self
            .slots
            .push(TaskSlot {
                id,
                period_ms,
                last_dispatch_ms: None,
                dispatch_count: 0,
            })
            .is_err()
        {
            panic!("task table full: cannot register more than {} tasks", MAX_TASKS);
        }
    }

    /// Run one scheduler tick
    ///
    /// Walks the task table in registration order; every due task has its
    /// `last_dispatch` stamped to `now_ms` and is then dispatched through
    /// the callback. All tasks due at the same tick dispatch within that
    /// tick; a task is delayed by earlier task bodies but never skipped.
    pub fn tick<F: FnMut(TaskId)>(&mut self, now_ms: u64, mut dispatch: F) {
        for slot in self.slots.iter_mut() {
            if slot.is_due(now_ms) {
                slot.last_dispatch_ms = Some(now_ms);
                slot.dispatch_count = slot.dispatch_count.saturating_add(1);
                dispatch(slot.id);
            }
        }
    }

    /// Look up the descriptor for a task
    pub fn slot(&self, id: TaskId) -> Option<&TaskSlot> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    /// Number of registered tasks
    pub fn task_count(&self) -> usize {
        self.slots.len()
    }

    /// Iterate over all descriptors in dispatch order
    pub fn iter_slots(&self) -> impl Iterator<Item = &TaskSlot> {
        self.slots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    fn collect_dispatches(scheduler: &mut Scheduler, now_ms: u64) -> Vec<TaskId> {
        let mut dispatched = Vec::new();
        scheduler.tick(now_ms, |id| dispatched.push(id));
        dispatched
    }

    #[test]
    fn test_first_tick_dispatches_immediately() {
        let mut scheduler = Scheduler::new();
        scheduler.register(TaskId::Acquisition, 100);

        assert_eq!(collect_dispatches(&mut scheduler, 0), vec![TaskId::Acquisition]);
    }

    #[test]
    fn test_dispatch_order_is_registration_order() {
        let mut scheduler = Scheduler::new();
        scheduler.register(TaskId::Acquisition, 100);
        scheduler.register(TaskId::Telemetry, 1000);
        scheduler.register(TaskId::Logger, 1000);
        scheduler.register(TaskId::Display, 200);

        // Everything is due on the first tick; order must match priority
        assert_eq!(
            collect_dispatches(&mut scheduler, 0),
            vec![
                TaskId::Acquisition,
                TaskId::Telemetry,
                TaskId::Logger,
                TaskId::Display
            ]
        );
    }

    #[test]
    fn test_period_gates_dispatch() {
        let mut scheduler = Scheduler::new();
        scheduler.register(TaskId::Acquisition, 100);

        assert_eq!(collect_dispatches(&mut scheduler, 0).len(), 1);
        assert_eq!(collect_dispatches(&mut scheduler, 50).len(), 0);
        assert_eq!(collect_dispatches(&mut scheduler, 99).len(), 0);
        assert_eq!(collect_dispatches(&mut scheduler, 100).len(), 1);
        assert_eq!(collect_dispatches(&mut scheduler, 150).len(), 0);
    }

    #[test]
    fn test_late_dispatch_drifts_the_schedule() {
        let mut scheduler = Scheduler::new();
        scheduler.register(TaskId::Acquisition, 100);

        // Ticks at t=0, 100, 250: all dispatch (250 - 100 = 150 >= 100)
        assert_eq!(collect_dispatches(&mut scheduler, 0).len(), 1);
        assert_eq!(collect_dispatches(&mut scheduler, 100).len(), 1);
        assert_eq!(collect_dispatches(&mut scheduler, 250).len(), 1);

        // The reference moved to 250, so the next boundary is 350, not
        // the nominal 300
        assert_eq!(collect_dispatches(&mut scheduler, 349).len(), 0);
        assert_eq!(collect_dispatches(&mut scheduler, 350).len(), 1);
    }

    #[test]
    fn test_minimum_spacing_between_dispatches() {
        let mut scheduler = Scheduler::new();
        scheduler.register(TaskId::Acquisition, 100);
        scheduler.register(TaskId::Display, 200);

        let mut dispatch_times: Vec<(TaskId, u64)> = Vec::new();
        let mut now = 0u64;
        // Irregular tick cadence, including bursts faster than any period
        for step in [3u64, 7, 13, 29, 57, 99, 101, 250, 1, 1, 40].iter().cycle().take(200) {
            scheduler.tick(now, |id| dispatch_times.push((id, now)));
            now += step;
        }

        for &(id, period) in &[(TaskId::Acquisition, 100u64), (TaskId::Display, 200u64)] {
            let times: Vec<u64> = dispatch_times
                .iter()
                .filter(|(d, _)| *d == id)
                .map(|&(_, t)| t)
                .collect();
            assert!(!times.is_empty());
            for pair in times.windows(2) {
                assert!(
                    pair[1] - pair[0] >= period,
                    "{:?} dispatched {} ms apart (period {})",
                    id,
                    pair[1] - pair[0],
                    period
                );
            }
        }
    }

    #[test]
    fn test_all_due_tasks_dispatch_in_one_tick() {
        let mut scheduler = Scheduler::new();
        scheduler.register(TaskId::Acquisition, 100);
        scheduler.register(TaskId::Telemetry, 1000);

        assert_eq!(collect_dispatches(&mut scheduler, 0).len(), 2);
        // A long gap makes both due again; both run on the same tick
        assert_eq!(
            collect_dispatches(&mut scheduler, 5000),
            vec![TaskId::Acquisition, TaskId::Telemetry]
        );
    }

    #[test]
    fn test_dispatch_count_and_slot_lookup() {
        let mut scheduler = Scheduler::new();
        scheduler.register(TaskId::Acquisition, 100);

        collect_dispatches(&mut scheduler, 0);
        collect_dispatches(&mut scheduler, 100);
        collect_dispatches(&mut scheduler, 150); // not due

        let slot = scheduler.slot(TaskId::Acquisition).unwrap();
        assert_eq!(slot.dispatch_count, 2);
        assert_eq!(slot.last_dispatch_ms, Some(100));
        assert!(scheduler.slot(TaskId::Display).is_none());
        assert_eq!(scheduler.task_count(), 1);
    }

    #[test]
    #[should_panic(expected = "task table full")]
    fn test_register_overflow_panics() {
        let mut scheduler = Scheduler::new();
        for _ in 0..=MAX_TASKS {
            scheduler.register(TaskId::Display, 100);
        }
    }

    #[test]
    fn test_task_names() {
        assert_eq!(TaskId::Acquisition.name(), "acquisition");
        assert_eq!(TaskId::Telemetry.name(), "telemetry");
        assert_eq!(TaskId::Logger.name(), "logger");
        assert_eq!(TaskId::Display.name(), "display");
    }
}
