//! Game state snapshot — the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// All live ships, in unspecified order.
    pub ships: Vec<ShipView>,
    /// Notifications raised since the previous snapshot, in mutation order.
    pub events: Vec<GameEvent>,
}

/// A visible ship on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub number: u32,
    pub position: Position,
    /// Relocation transition duration (milliseconds).
    pub transition_ms: f64,
}
