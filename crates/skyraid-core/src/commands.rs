//! Player commands sent from the presentation layer to the engine.

use serde::{Deserialize, Serialize};

/// A command queued for processing at the next tick boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Eliminate the ship with the given number.
    ///
    /// A no-op if the number is unknown or already removed, so rapid
    /// double interactions and races against spawn/move ticks are
    /// harmless.
    Eliminate { ship_number: u32 },
}
