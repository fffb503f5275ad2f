//! Events emitted by the simulation for the presentation layer.
//!
//! Events are buffered during a tick and drained into that tick's
//! snapshot, in the order the mutations occurred. The core never
//! references any rendering concept; how an event is displayed or
//! animated is entirely the consumer's business.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Outbound notification from the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A ship joined the fleet.
    ShipAdded { number: u32, position: Position },
    /// A ship relocated. `transition_ms` is the animation duration hint
    /// for the move to `position`.
    ShipMoved {
        number: u32,
        position: Position,
        transition_ms: f64,
    },
    /// A ship was eliminated. Carries no payload: downstream only
    /// consumes the fleet count, which the snapshot already holds.
    ShipRemoved,
    /// The fleet was emptied. Emitted exactly once per session.
    Won,
}
