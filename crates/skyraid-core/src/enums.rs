//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Overall game phase.
///
/// There is no pause or loss state: the game runs until the fleet is
/// emptied, then stays won. `Won` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Spawner and movement tasks active, eliminations accepted.
    #[default]
    Running,
    /// Fleet emptied at least once; all periodic tasks stopped.
    Won,
}
