//! Dataset resources: the sample point array, its spatial bounds, and
//! the JSON viewer configuration.

/// Axis-aligned bounds computed from the sample array.
pub mod bounds;

/// The validated sample array, replaced wholesale on reload.
pub mod sample_set;

/// JSON viewer configuration loaded as a Bevy asset.
pub mod viewer_config;
