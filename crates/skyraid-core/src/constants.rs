//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Milliseconds per tick.
pub const TICK_MS: f64 = 1000.0 / TICK_RATE as f64;

// --- Board defaults ---

/// Default board width (board units).
pub const DEFAULT_BOARD_WIDTH: f64 = 500.0;

/// Default board height (board units).
pub const DEFAULT_BOARD_HEIGHT: f64 = 500.0;

/// Default number of enemy ships seeded at game start.
pub const DEFAULT_INITIAL_ENEMIES: u32 = 5;

/// Default interval between spawner ticks (milliseconds).
pub const DEFAULT_SPAWN_INTERVAL_MS: f64 = 5000.0;

/// Ships created per spawner tick by default.
pub const DEFAULT_SPAWN_PER_TICK: u32 = 1;

// --- Ship defaults ---

/// Default interval between fleet movement ticks (milliseconds).
pub const DEFAULT_MOVEMENT_INTERVAL_MS: f64 = 1000.0;

/// Default relocation transition duration (milliseconds).
/// This is the animation hint carried on `ShipMoved` events.
pub const DEFAULT_SHIP_SPEED_MS: f64 = 500.0;

/// Convert an interval in milliseconds to whole engine ticks.
/// Intervals shorter than one tick clamp to one tick, so a zero
/// interval fires every tick rather than never.
pub fn ms_to_ticks(interval_ms: f64) -> u64 {
    let ticks = (interval_ms / TICK_MS).round() as u64;
    ticks.max(1)
}
