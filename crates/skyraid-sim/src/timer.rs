//! Explicitly owned periodic task handles.
//!
//! Every repeating process in the engine (spawning, fleet movement) is
//! driven by a `PeriodicTask` checked once per engine tick. Nothing is
//! ambient: the owner holds the handle and cancels it deterministically.

/// A repeating schedule measured in engine ticks.
///
/// The first firing is one full interval after construction (tick
/// `interval`), never at tick 0, so work done at construction — initial
/// seeding in particular — is always observable before the first
/// periodic firing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodicTask {
    interval_ticks: u64,
    next_due_tick: u64,
    running: bool,
}

impl PeriodicTask {
    /// Create a running task firing every `interval_ticks` (min 1).
    pub fn new(interval_ticks: u64) -> Self {
        let interval_ticks = interval_ticks.max(1);
        Self {
            interval_ticks,
            next_due_tick: interval_ticks,
            running: true,
        }
    }

    /// Whether the task fires at `current_tick`. Advances the schedule
    /// when it does. A stopped task is never due.
    pub fn due(&mut self, current_tick: u64) -> bool {
        if !self.running || current_tick < self.next_due_tick {
            return false;
        }
        self.next_due_tick = current_tick + self.interval_ticks;
        true
    }

    /// Cancel the task. Idempotent: stopping a stopped task is a no-op.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_due_at_tick_zero() {
        let mut task = PeriodicTask::new(1);
        assert!(!task.due(0));
        assert!(task.due(1));
    }

    #[test]
    fn test_fires_every_interval() {
        let mut task = PeriodicTask::new(10);
        let fired: Vec<u64> = (0..35).filter(|&t| task.due(t)).collect();
        assert_eq!(fired, vec![10, 20, 30]);
    }

    #[test]
    fn test_zero_interval_clamps_to_one() {
        let mut task = PeriodicTask::new(0);
        assert!(!task.due(0));
        assert!(task.due(1));
        assert!(task.due(2));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut task = PeriodicTask::new(5);
        task.stop();
        task.stop();
        assert!(!task.is_running());
        assert!(!task.due(5));
        assert!(!task.due(100));
    }
}
