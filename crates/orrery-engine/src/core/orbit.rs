//! Parametric ellipse paths — pure math, no engine dependencies.
//!
//! Uses f64 throughout for precision over long-running sessions (hours of
//! elapsed time × per-body speed factors). Only convert to f32 at the final
//! screen-coordinate step in the motion system.

use glam::DVec2;
use std::f64::consts::TAU;

/// Angle tolerance for detecting degenerate (zero-sweep) paths.
const SWEEP_EPSILON: f64 = 1e-9;

/// An elliptical orbit path: center offset, two radii, an angle range, and a
/// sweep direction. Position at time fraction `t ∈ [0,1)` is sampled via the
/// standard ellipse parametrization between start and end angle.
#[derive(Debug, Clone, Copy)]
pub struct OrbitPath {
    /// Ellipse center X in world units.
    pub center_x: f64,
    /// Ellipse center Y in world units.
    pub center_y: f64,
    /// Semi-axis along X.
    pub radius_x: f64,
    /// Semi-axis along Y.
    pub radius_y: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Sweep direction. Counter-clockwise by default.
    pub clockwise: bool,
}

impl OrbitPath {
    pub fn new(
        center_x: f64,
        center_y: f64,
        radius_x: f64,
        radius_y: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Self {
            center_x,
            center_y,
            radius_x,
            radius_y,
            start_angle,
            end_angle,
            clockwise: false,
        }
    }

    /// A full counter-clockwise ellipse starting at angle 0.
    pub fn ellipse(center_x: f64, center_y: f64, radius_x: f64, radius_y: f64) -> Self {
        Self::new(center_x, center_y, radius_x, radius_y, 0.0, TAU)
    }

    /// Reverse the sweep direction.
    pub fn reversed(mut self) -> Self {
        self.clockwise = true;
        self
    }

    /// Signed angular sweep from start to end.
    ///
    /// The raw delta is wrapped into `(0, 2π]` so that ranges like `[π, 3π]`
    /// cover one full revolution, then negated for clockwise paths. A
    /// zero-length range stays zero rather than becoming a full turn.
    pub fn sweep(&self) -> f64 {
        let raw = self.end_angle - self.start_angle;
        let coincident = raw.abs() < SWEEP_EPSILON;

        let mut delta = raw.rem_euclid(TAU);
        if delta < SWEEP_EPSILON {
            delta = if coincident { 0.0 } else { TAU };
        }
        if self.clockwise && !coincident {
            delta = if (delta - TAU).abs() < SWEEP_EPSILON {
                -TAU
            } else {
                delta - TAU
            };
        }
        delta
    }

    /// The 2D point on the ellipse at time fraction `t ∈ [0,1)`, mapped from
    /// the path's angle range. Pure and deterministic: same inputs always
    /// yield the same output.
    pub fn point_at(&self, t: f64) -> DVec2 {
        let angle = self.start_angle + t * self.sweep();
        DVec2::new(
            self.center_x + self.radius_x * angle.cos(),
            self.center_y + self.radius_y * angle.sin(),
        )
    }

    /// Whether the path collapses to a point (zero radius or zero sweep).
    pub fn is_degenerate(&self) -> bool {
        self.radius_x.abs() < SWEEP_EPSILON
            || self.radius_y.abs() < SWEEP_EPSILON
            || self.sweep().abs() < SWEEP_EPSILON
    }
}
