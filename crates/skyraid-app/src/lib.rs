//! Runtime shell for SKYRAID.
//!
//! Hosts the fixed-rate game loop thread and the channel plumbing a
//! frontend uses to drive the engine. The binary in this crate is a
//! headless autoplayer standing in for the presentation layer.

pub mod game_loop;
pub mod state;
