//! Game engine — the core of the game.
//!
//! `GameEngine` owns the fleet and the spawner, processes player
//! commands, runs the periodic tasks, evaluates the win condition, and
//! produces `GameStateSnapshot`s. Completely headless (no windowing or
//! IPC dependency), enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyraid_core::commands::PlayerCommand;
use skyraid_core::config::{ConfigError, GameConfig};
use skyraid_core::enums::GamePhase;
use skyraid_core::events::GameEvent;
use skyraid_core::state::GameStateSnapshot;
use skyraid_core::types::SimTime;

use crate::fleet::Fleet;
use crate::snapshot;
use crate::spawner::Spawner;

/// The game engine. Owns the fleet, the spawner, and all game state.
pub struct GameEngine {
    fleet: Fleet,
    spawner: Spawner,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Create a new engine and start the game.
    ///
    /// Validates the configuration, seeds the initial fleet, and leaves
    /// both periodic tasks running. The seeding `ShipAdded` events are
    /// buffered ahead of anything a periodic task can produce and land
    /// in the first snapshot. With `initial_enemies == 0` the game is
    /// won on the spot and the first snapshot carries the `Won` event.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut engine = Self {
            fleet: Fleet::new(&config),
            spawner: Spawner::new(&config),
            time: SimTime::default(),
            phase: GamePhase::Running,
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        };

        engine.spawner.spawn_now(
            config.board.initial_enemies,
            &mut engine.fleet,
            &mut engine.events,
        );
        engine.check_win();

        Ok(engine)
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the game by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_tasks();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        snapshot::build_snapshot(&self.fleet, &self.time, self.phase, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the fleet.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Whether the spawner's periodic schedule is still active.
    pub fn spawner_running(&self) -> bool {
        self.spawner.is_running()
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. `Won` is terminal: every command
    /// is inert afterwards.
    fn handle_command(&mut self, command: PlayerCommand) {
        if self.phase != GamePhase::Running {
            return;
        }
        match command {
            PlayerCommand::Eliminate { ship_number } => {
                if self.fleet.remove(ship_number, &mut self.events) {
                    self.check_win();
                }
            }
        }
    }

    /// Run the periodic tasks in order: spawning, then movement.
    /// Ships spawned this tick also relocate this tick if the movement
    /// task is due.
    fn run_tasks(&mut self) {
        self.spawner
            .run(&mut self.fleet, self.time.tick, &mut self.events);
        self.fleet
            .run_movement(&mut self.rng, self.time.tick, &mut self.events);
    }

    /// Transition to `Won` if the fleet is empty. Fires at most once:
    /// the phase guard makes a second empty-fleet state unreachable
    /// (nothing spawns after the spawner stops).
    fn check_win(&mut self) {
        if self.phase == GamePhase::Running && self.fleet.is_empty() {
            self.phase = GamePhase::Won;
            self.spawner.stop();
            self.fleet.stop_movement();
            self.events.push(GameEvent::Won);
        }
    }
}
