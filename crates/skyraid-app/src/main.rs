//! Headless autoplayer — drives a full game session to the win event.
//!
//! Stands in for the presentation layer: consumes snapshots, logs the
//! boundary events, and periodically eliminates the lowest-numbered
//! live ship until the fleet is empty.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use skyraid_core::commands::PlayerCommand;
use skyraid_core::config::GameConfig;
use skyraid_core::events::GameEvent;

use skyraid_app::game_loop::spawn_game_loop;
use skyraid_app::state::{new_shared_snapshot, GameLoopCommand};

/// How often the autoplayer fires an eliminate.
const ELIMINATE_INTERVAL: Duration = Duration::from_millis(700);

fn main() {
    init_tracing();
    info!("=== SKYRAID startup ===");

    let config = GameConfig::default();
    let (snapshot_tx, snapshot_rx) = mpsc::channel();
    let latest_snapshot = new_shared_snapshot();

    let cmd_tx = match spawn_game_loop(config, snapshot_tx, latest_snapshot) {
        Ok(tx) => tx,
        Err(err) => {
            warn!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let mut next_eliminate = Instant::now() + ELIMINATE_INTERVAL;
    let mut won = false;

    while let Ok(snapshot) = snapshot_rx.recv() {
        for event in &snapshot.events {
            match serde_json::to_string(event) {
                Ok(json) => info!(tick = snapshot.time.tick, "{json}"),
                Err(err) => warn!("Failed to encode event: {err}"),
            }
            if matches!(event, GameEvent::Won) {
                won = true;
            }
        }

        if won {
            info!(
                elapsed_secs = snapshot.time.elapsed_secs,
                "You win <3! Hire me ^_^"
            );
            break;
        }

        if Instant::now() >= next_eliminate {
            if let Some(ship) = snapshot.ships.first() {
                let command = PlayerCommand::Eliminate {
                    ship_number: ship.number,
                };
                if cmd_tx.send(GameLoopCommand::PlayerCommand(command)).is_err() {
                    break;
                }
                next_eliminate = Instant::now() + ELIMINATE_INTERVAL;
            }
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
