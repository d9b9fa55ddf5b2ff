//! Interactive 3D viewer engine for geological sample data.
//!
//! Ingests column-agnostic CSV into a validated point set, partitions
//! it by a depth/grade filter window, builds the bounding frame and
//! slice planes, and answers ray picking queries over the visible
//! subset. The Bevy app in `engine::core` wires these pieces to a
//! renderer, orbit camera, and UI readouts.

pub mod engine;
pub mod tools;
