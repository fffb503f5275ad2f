//! Simulation engine for SKYRAID.
//!
//! Owns the hecs ECS world holding the fleet, runs the spawner and
//! movement periodic tasks at a fixed tick rate, and produces
//! `GameStateSnapshot`s for the frontend.

pub mod engine;
pub mod fleet;
pub mod snapshot;
pub mod spawner;
pub mod timer;

pub use engine::GameEngine;
pub use skyraid_core as core;
