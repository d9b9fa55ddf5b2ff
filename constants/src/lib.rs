//! Shared constants for the grade viewer engine.
//!
//! Holds the confidence classification table, the grade colour ramp,
//! render settings, and the world coordinate convention so that both
//! the engine and its tests agree on the same fixed values.

pub mod colour_ramp;
pub mod confidence;
pub mod coordinate_system;
pub mod render_settings;
