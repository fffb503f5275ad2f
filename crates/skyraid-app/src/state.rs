//! Shared state between the frontend-facing side and the game loop thread.

use std::sync::{Arc, Mutex};

use skyraid_core::commands::PlayerCommand;
use skyraid_core::state::GameStateSnapshot;

/// Commands sent from the frontend side to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the game engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot slot, updated by the game loop thread after each
/// tick and polled synchronously by the frontend side.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Fresh empty snapshot slot.
pub fn new_shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}
