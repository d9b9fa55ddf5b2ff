/// Fixed grey for dimmed (filtered-out) points. Dimmed points keep the
/// dataset's shape on screen but carry no value encoding.
pub const DIMMED_GREY: f32 = 0.28;

/// Opacities for the two point draw sets.
pub const VIVID_OPACITY: f32 = 0.95;
pub const DIMMED_OPACITY: f32 = 0.18;

/// Frame line opacities.
pub const FRAME_EDGE_OPACITY: f32 = 0.25;
pub const AXIS_OPACITY: f32 = 0.8;
pub const TICK_OPACITY: f32 = 0.7;
pub const GRID_OPACITY: f32 = 0.18;

/// Translucent slice plane alpha.
pub const SLICE_PLANE_OPACITY: f32 = 0.07;

/// Picking threshold: maximum perpendicular distance from the pointer
/// ray to a point, in world units.
pub const PICK_THRESHOLD: f32 = 8.0;

/// Radius of the white highlight sphere spawned on a successful pick.
pub const HIGHLIGHT_RADIUS: f32 = 6.0;

/// Coarse tonnage proxy: estimated tons represented by one visible
/// sample, independent of spatial density.
pub const TONS_PER_POINT: f64 = 100.0;

/// Number of swatches sampled for the vertical legend gradient.
pub const LEGEND_SAMPLES: usize = 24;

/// Extra camera pull-back added to the bounds diagonal on reset-to-fit.
pub const CAMERA_FIT_MARGIN: f32 = 600.0;

/// Depth slice thickness limits for the centre/thickness steering mode.
pub const SLICE_THICKNESS_MIN: f64 = 40.0;
pub const SLICE_THICKNESS_MAX: f64 = 400.0;
