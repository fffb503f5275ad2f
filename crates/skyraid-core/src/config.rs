//! Validated game configuration.
//!
//! Every recognized option is an explicit field with a default matching
//! the original game tuning. Validation runs once, at engine
//! construction, and a bad value is fatal to game start — no runtime
//! operation can fail afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::types::Position;

/// Configuration rejected at construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },
    #[error("ship speed must be positive, got {transition_ms} ms")]
    InvalidSpeed { transition_ms: f64 },
    #[error("{name} interval must not be negative, got {interval_ms} ms")]
    NegativeInterval { name: &'static str, interval_ms: f64 },
    #[error("spawn_per_tick must be at least 1")]
    ZeroSpawnPerTick,
}

/// Board-level options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Board width in board units.
    pub width: f64,
    /// Board height in board units.
    pub height: f64,
    /// Ships seeded at game start. Zero means the game is won on
    /// construction.
    pub initial_enemies: u32,
    /// Interval between spawner ticks (milliseconds).
    pub spawn_interval_ms: f64,
    /// Ships created per spawner tick.
    pub spawn_per_tick: u32,
}

/// Per-ship options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipConfig {
    /// Interval between fleet relocation ticks (milliseconds).
    pub movement_interval_ms: f64,
    /// Position new ships spawn at.
    pub default_position: Position,
    /// Relocation transition duration for new ships (milliseconds).
    pub default_speed_ms: f64,
}

/// Configuration for starting a new game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    pub board: BoardConfig,
    pub ship: ShipConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            initial_enemies: DEFAULT_INITIAL_ENEMIES,
            spawn_interval_ms: DEFAULT_SPAWN_INTERVAL_MS,
            spawn_per_tick: DEFAULT_SPAWN_PER_TICK,
        }
    }
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            movement_interval_ms: DEFAULT_MOVEMENT_INTERVAL_MS,
            default_position: Position::default(),
            default_speed_ms: DEFAULT_SHIP_SPEED_MS,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            board: BoardConfig::default(),
            ship: ShipConfig::default(),
        }
    }
}

impl GameConfig {
    /// Check every option. Intervals of zero are accepted and clamp to
    /// one engine tick; only negative intervals are rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let board = &self.board;
        if !(board.width > 0.0) || !(board.height > 0.0) {
            return Err(ConfigError::InvalidDimensions {
                width: board.width,
                height: board.height,
            });
        }
        if board.spawn_interval_ms < 0.0 {
            return Err(ConfigError::NegativeInterval {
                name: "spawn",
                interval_ms: board.spawn_interval_ms,
            });
        }
        if board.spawn_per_tick == 0 {
            return Err(ConfigError::ZeroSpawnPerTick);
        }
        let ship = &self.ship;
        if ship.movement_interval_ms < 0.0 {
            return Err(ConfigError::NegativeInterval {
                name: "movement",
                interval_ms: ship.movement_interval_ms,
            });
        }
        if !(ship.default_speed_ms > 0.0) {
            return Err(ConfigError::InvalidSpeed {
                transition_ms: ship.default_speed_ms,
            });
        }
        Ok(())
    }
}
