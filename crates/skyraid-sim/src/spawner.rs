//! Spawner — periodic and ad-hoc creation of enemy ships.

use skyraid_core::config::GameConfig;
use skyraid_core::constants::ms_to_ticks;
use skyraid_core::events::GameEvent;
use skyraid_core::types::Position;

use crate::fleet::Fleet;
use crate::timer::PeriodicTask;

/// Creates ships at the configured default position and speed, both on
/// its periodic schedule and immediately via `spawn_now` for the
/// initial seeding.
pub struct Spawner {
    schedule: PeriodicTask,
    per_tick: u32,
    default_position: Position,
    default_speed_ms: f64,
}

impl Spawner {
    /// Create a spawner with a running schedule.
    ///
    /// The schedule first fires one full interval after start, so
    /// `spawn_now` seeding at construction always lands before the
    /// first periodic batch.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            schedule: PeriodicTask::new(ms_to_ticks(config.board.spawn_interval_ms)),
            per_tick: config.board.spawn_per_tick,
            default_position: config.ship.default_position,
            default_speed_ms: config.ship.default_speed_ms,
        }
    }

    /// Spawn the periodic batch if the schedule is due.
    pub fn run(&mut self, fleet: &mut Fleet, current_tick: u64, events: &mut Vec<GameEvent>) {
        if !self.schedule.due(current_tick) {
            return;
        }
        self.spawn_now(self.per_tick, fleet, events);
    }

    /// Create `quantity` ships immediately, outside the schedule.
    pub fn spawn_now(&self, quantity: u32, fleet: &mut Fleet, events: &mut Vec<GameEvent>) {
        for _ in 0..quantity {
            fleet.add(self.default_position, self.default_speed_ms, events);
        }
    }

    /// Cancel the periodic schedule. Idempotent.
    pub fn stop(&mut self) {
        self.schedule.stop();
    }

    pub fn is_running(&self) -> bool {
        self.schedule.is_running()
    }
}
