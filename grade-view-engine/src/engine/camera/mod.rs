//! Orbit camera over the sample cloud.

pub mod orbit_camera;

pub use orbit_camera::{OrbitCamera, camera_controller, fit_camera_system};
