//! The dual-predicate filter: depth window and grade range.
//!
//! `window` owns the mutable filter state and the slider drag state
//! machine; `engine` is the pure partition/statistics pass; `systems`
//! wires recomputation to Bevy change detection and rebuilds the
//! visible/dimmed draw sets.

pub mod engine;
pub mod systems;
pub mod window;
