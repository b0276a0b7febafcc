//! Core types and definitions for the PRONAV intercept simulator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! kinematic types, configuration, status enums, step snapshots, and constants.
//! It has no dependency on the simulation engine or any runtime framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
