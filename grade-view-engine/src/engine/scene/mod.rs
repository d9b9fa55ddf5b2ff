//! Scene construction: frame geometry, point draw sets, slice planes,
//! world-anchored labels, and the legend gradient.

/// Pure frame geometry derived from the dataset bounds.
pub mod frame;

/// UI labels anchored to world positions, projected each frame.
pub mod labels;

/// Vertical legend gradient sampled from the grade ramp.
pub mod legend;

/// Line and point-cloud mesh construction for the renderer.
pub mod points;

/// Movable translucent slice planes tracking the depth window.
pub mod slice_planes;

/// Frame entity lifecycle: spawn on load, rebuild on dataset swap.
pub mod spawn;
