//! Target evasion model for PRONAV.
//!
//! Pure functions that advance the target's maneuver state and compute its
//! lateral acceleration command. No engine dependency; operates on plain data.

pub mod maneuver;

pub use pronav_core as core;
