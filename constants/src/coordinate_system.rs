use bevy::prelude::*;

/// World up axis. Sample data uses mine-grid coordinates: X easting,
/// Y northing, Z vertical with depth expressed as a non-positive value
/// below the zero datum, so the camera orbits with Z up.
pub const WORLD_UP: Vec3 = Vec3::Z;

/// Depth tick interval along the Z axis, in metres.
pub const DEPTH_TICK_STEP: f64 = 200.0;
