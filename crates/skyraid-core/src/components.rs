//! ECS components attached to fleet entities.
//!
//! `Position` from `types` is used directly as a component alongside
//! these. Components carry no behavior; systems and the fleet own all
//! mutation.

use serde::{Deserialize, Serialize};

/// Marker component for enemy ship entities.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Ship;

/// Stable identity assigned by the fleet when a ship is added.
///
/// Numbers are never reused within a session, so a stale eliminate
/// for an already-removed ship can never hit a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipId {
    pub number: u32,
}

/// Relocation speed: the duration of one relocation transition in
/// milliseconds. Forwarded to the presentation layer as an animation
/// hint on every `ShipMoved` event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Speed {
    pub transition_ms: f64,
}
