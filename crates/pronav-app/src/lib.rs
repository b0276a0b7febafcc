//! Headless PRONAV driver.
//!
//! Loads a configuration, owns a `Simulation` and drives it either in batch
//! or on a real-time loop thread.

pub mod cli;
pub mod config;
pub mod game_loop;
pub mod runner;
pub mod state;

pub use pronav_core as core;
