use bevy::prelude::*;

use constants::colour_ramp::{MAX_GRADE, MIN_GRADE};
use constants::render_settings::{SLICE_THICKNESS_MAX, SLICE_THICKNESS_MIN};

use crate::engine::assets::bounds::SampleBounds;

/// The active filter ranges. Mutated only by explicit user range
/// changes; both ranges keep `lo <= hi` and stay clamped to the
/// dataset's data-derived domains.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FilterWindow {
    pub depth_lo: f64,
    pub depth_hi: f64,
    pub grade_lo: f64,
    pub grade_hi: f64,
}

impl Default for FilterWindow {
    fn default() -> Self {
        // Initial slice: 200 m thick, centred at -900 m, full grade domain.
        Self {
            depth_lo: -1000.0,
            depth_hi: -800.0,
            grade_lo: MIN_GRADE,
            grade_hi: MAX_GRADE,
        }
    }
}

impl FilterWindow {
    pub fn set_depth(&mut self, lo: f64, hi: f64) {
        self.depth_lo = lo.min(hi);
        self.depth_hi = lo.max(hi);
    }

    pub fn set_grade(&mut self, lo: f64, hi: f64) {
        let lo = lo.clamp(MIN_GRADE, MAX_GRADE);
        let hi = hi.clamp(MIN_GRADE, MAX_GRADE);
        self.grade_lo = lo.min(hi);
        self.grade_hi = lo.max(hi);
    }

    pub fn depth_center(&self) -> f64 {
        (self.depth_lo + self.depth_hi) * 0.5
    }

    pub fn depth_thickness(&self) -> f64 {
        self.depth_hi - self.depth_lo
    }

    /// Steer the depth window as centre + thickness, the slider model.
    pub fn set_depth_center(&mut self, center: f64) {
        let half = self.depth_thickness() * 0.5;
        self.set_depth(center - half, center + half);
    }

    pub fn set_depth_thickness(&mut self, thickness: f64) {
        let thickness = thickness.clamp(SLICE_THICKNESS_MIN, SLICE_THICKNESS_MAX);
        let center = self.depth_center();
        self.set_depth(center - thickness * 0.5, center + thickness * 0.5);
    }

    /// Clamp the depth window to a freshly loaded dataset's Z extent.
    /// A window entirely outside the extent collapses under clamping
    /// and resets to the full extent instead.
    pub fn clamp_to(&mut self, bounds: &SampleBounds) {
        let lo = bounds.clamp_depth(self.depth_lo);
        let hi = bounds.clamp_depth(self.depth_hi);
        if lo >= hi {
            self.set_depth(bounds.min_z, bounds.max_z);
        } else {
            self.set_depth(lo, hi);
        }
        self.set_grade(self.grade_lo, self.grade_hi);
    }
}

/// Current drag target of a two-handle range input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    DraggingMin,
    DraggingMax,
    /// Dragging the span itself; `grab_offset` is the distance from
    /// the low handle to the grab point, preserved while moving.
    DraggingRange { grab_offset: f64 },
}

/// Explicit drag state machine for a slider-like range input. Consumes
/// discrete start/move/end events in value space and produces ordered,
/// domain-clamped ranges. No state carries over between gestures.
#[derive(Debug, Clone)]
pub struct RangeDrag {
    pub domain: (f64, f64),
    pub state: DragState,
}

impl RangeDrag {
    pub fn new(domain_lo: f64, domain_hi: f64) -> Self {
        Self {
            domain: (domain_lo.min(domain_hi), domain_lo.max(domain_hi)),
            state: DragState::Idle,
        }
    }

    fn grab_tolerance(&self) -> f64 {
        (self.domain.1 - self.domain.0) * 0.05
    }

    /// Pointer-down: grab the nearest handle when within tolerance,
    /// the whole span when the press lands inside it, otherwise jump
    /// the nearest handle to the press position.
    pub fn begin(&mut self, value: f64, range: (f64, f64)) {
        let (lo, hi) = range;
        let tolerance = self.grab_tolerance();
        let near_lo = (value - lo).abs();
        let near_hi = (value - hi).abs();
        self.state = if near_lo.min(near_hi) <= tolerance {
            if near_lo <= near_hi {
                DragState::DraggingMin
            } else {
                DragState::DraggingMax
            }
        } else if value > lo && value < hi {
            DragState::DraggingRange {
                grab_offset: value - lo,
            }
        } else if near_lo <= near_hi {
            DragState::DraggingMin
        } else {
            DragState::DraggingMax
        };
    }

    /// Pointer-move: produce the updated range. A move without a prior
    /// `begin` leaves the range untouched.
    pub fn drag_to(&mut self, value: f64, range: (f64, f64)) -> (f64, f64) {
        let (lo, hi) = range;
        let (dom_lo, dom_hi) = self.domain;
        let value = value.clamp(dom_lo, dom_hi);
        match self.state {
            DragState::Idle => range,
            DragState::DraggingMin => (value.min(hi), hi),
            DragState::DraggingMax => (lo, value.max(lo)),
            DragState::DraggingRange { grab_offset } => {
                let width = hi - lo;
                let new_lo = (value - grab_offset).clamp(dom_lo, dom_hi - width);
                (new_lo, new_lo + width)
            }
        }
    }

    /// Pointer-up: the gesture ends and nothing continues implicitly.
    pub fn end(&mut self) {
        self.state = DragState::Idle;
    }

    pub fn is_idle(&self) -> bool {
        self.state == DragState::Idle
    }
}

/// Drag machines for the two on-screen range inputs.
#[derive(Resource)]
pub struct RangeDragInputs {
    pub depth: RangeDrag,
    pub grade: RangeDrag,
}

impl Default for RangeDragInputs {
    fn default() -> Self {
        Self {
            depth: RangeDrag::new(-1600.0, 0.0),
            grade: RangeDrag::new(MIN_GRADE, MAX_GRADE),
        }
    }
}
