//! Snapshot building — turns fleet state into a `GameStateSnapshot`.

use skyraid_core::components::{ShipId, Speed};
use skyraid_core::enums::GamePhase;
use skyraid_core::events::GameEvent;
use skyraid_core::state::{GameStateSnapshot, ShipView};
use skyraid_core::types::{Position, SimTime};

use crate::fleet::Fleet;

/// Build the complete per-tick state for the frontend. Takes ownership
/// of the tick's drained events.
pub fn build_snapshot(
    fleet: &Fleet,
    time: &SimTime,
    phase: GamePhase,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let mut ships: Vec<ShipView> = fleet
        .world()
        .query::<(&ShipId, &Position, &Speed)>()
        .iter()
        .map(|(_entity, (id, position, speed))| ShipView {
            number: id.number,
            position: *position,
            transition_ms: speed.transition_ms,
        })
        .collect();

    // Stable order for frontends and for snapshot comparison in tests.
    ships.sort_by_key(|view| view.number);

    GameStateSnapshot {
        time: *time,
        phase,
        ships,
        events,
    }
}
