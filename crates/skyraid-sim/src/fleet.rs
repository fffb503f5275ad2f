//! The fleet — the owned set of live enemy ships.
//!
//! The fleet is the only component that touches the ECS world. The
//! spawner and the eliminate command go through `add`/`remove`; the
//! movement task relocates every ship in place. Mutations push their
//! notifications onto the caller's event buffer in the order they
//! happen.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyraid_core::components::{Ship, ShipId, Speed};
use skyraid_core::config::GameConfig;
use skyraid_core::constants::ms_to_ticks;
use skyraid_core::events::GameEvent;
use skyraid_core::types::Position;

use crate::timer::PeriodicTask;

/// Owned collection of live ships plus its movement schedule.
pub struct Fleet {
    world: World,
    next_ship_number: u32,
    movement: PeriodicTask,
    board_width: f64,
    board_height: f64,
}

impl Fleet {
    /// Create an empty fleet with a running movement task.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            world: World::new(),
            next_ship_number: 0,
            movement: PeriodicTask::new(ms_to_ticks(config.ship.movement_interval_ms)),
            board_width: config.board.width,
            board_height: config.board.height,
        }
    }

    /// Insert a new ship and emit `ShipAdded`. Returns the assigned
    /// ship number. Numbers are unique for the session.
    pub fn add(
        &mut self,
        position: Position,
        transition_ms: f64,
        events: &mut Vec<GameEvent>,
    ) -> u32 {
        let number = self.next_ship_number;
        self.next_ship_number += 1;

        self.world
            .spawn((Ship, ShipId { number }, position, Speed { transition_ms }));
        events.push(GameEvent::ShipAdded { number, position });
        number
    }

    /// Remove a ship by number and emit `ShipRemoved`.
    ///
    /// Returns `false` without emitting anything when the number is not
    /// present — eliminations race against spawn and move ticks, and a
    /// second eliminate for the same ship must be harmless.
    pub fn remove(&mut self, number: u32, events: &mut Vec<GameEvent>) -> bool {
        let found = self
            .world
            .query_mut::<&ShipId>()
            .into_iter()
            .find(|(_, id)| id.number == number)
            .map(|(entity, _)| entity);

        let Some(entity) = found else {
            return false;
        };

        let _ = self.world.despawn(entity);
        events.push(GameEvent::ShipRemoved);
        true
    }

    /// Number of live ships. This is the win-condition signal.
    pub fn len(&self) -> usize {
        self.world.query::<&Ship>().iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run the movement task if due: relocate every ship to a fresh
    /// uniform random in-bounds position and emit `ShipMoved` for each.
    /// Per-ship order within one firing is unspecified.
    pub fn run_movement(
        &mut self,
        rng: &mut ChaCha8Rng,
        current_tick: u64,
        events: &mut Vec<GameEvent>,
    ) {
        if !self.movement.due(current_tick) {
            return;
        }

        for (_entity, (id, pos, speed)) in
            self.world.query_mut::<(&ShipId, &mut Position, &Speed)>()
        {
            let next = Position::new(
                rng.gen_range(0.0..self.board_width),
                rng.gen_range(0.0..self.board_height),
            );
            *pos = next;
            events.push(GameEvent::ShipMoved {
                number: id.number,
                position: next,
                transition_ms: speed.transition_ms,
            });
        }
    }

    /// Cancel the movement task. Idempotent.
    pub fn stop_movement(&mut self) {
        self.movement.stop();
    }

    pub fn movement_running(&self) -> bool {
        self.movement.is_running()
    }

    /// Read-only access to the ECS world for snapshots and tests.
    pub fn world(&self) -> &World {
        &self.world
    }
}
