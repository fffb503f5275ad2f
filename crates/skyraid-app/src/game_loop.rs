//! Game loop thread — runs the game engine at 30Hz and emits snapshots.
//!
//! Commands arrive via `mpsc` channel. Snapshots are forwarded over a
//! second channel and stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use skyraid_core::config::{ConfigError, GameConfig};
use skyraid_core::constants::TICK_RATE;
use skyraid_core::state::GameStateSnapshot;
use skyraid_sim::engine::GameEngine;

use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Start the game and spawn its loop in a new thread.
///
/// Fails fast on invalid configuration, before any thread exists.
/// Returns the command sender for the frontend side to use.
pub fn spawn_game_loop(
    config: GameConfig,
    snapshot_tx: mpsc::Sender<GameStateSnapshot>,
    latest_snapshot: SharedSnapshot,
) -> Result<mpsc::Sender<GameLoopCommand>, ConfigError> {
    let engine = GameEngine::new(config)?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("skyraid-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, snapshot_tx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    Ok(cmd_tx)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: GameEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snapshot_tx: mpsc::Sender<GameStateSnapshot>,
    latest_snapshot: &SharedSnapshot,
) {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (the engine handles the won phase internally)
        let snapshot = engine.tick();

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }

        // 4. Forward the snapshot; a dropped receiver means the
        //    frontend is gone and the loop should end
        if snapshot_tx.send(snapshot).is_err() {
            return;
        }

        // 5. Sleep until next tick, adjusting for time_scale
        let time_scale = engine.time_scale();
        let effective_tick_duration = if time_scale > 0.001 {
            TICK_DURATION.div_f64(time_scale)
        } else {
            TICK_DURATION
        };

        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else {
            // Fell behind; resynchronize rather than spiral
            next_tick_time = now;
        }
    }
}
