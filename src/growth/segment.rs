use crate::math::{QuadraticBezier, Vec3};

/// A tapered, gently bowed tube: one branch, sub-branch or root
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeSegment {
    pub start: Vec3,
    pub end: Vec3,
    pub start_radius: f32,
    pub end_radius: f32,
    /// Displacement of the curve's control point from the chord midpoint
    pub curve_offset: Vec3,
}

impl TubeSegment {
    pub fn curve(&self) -> QuadraticBezier {
        QuadraticBezier::bowed(self.start, self.end, self.curve_offset)
    }

    pub fn radius_at(&self, t: f32) -> f32 {
        self.start_radius + (self.end_radius - self.start_radius) * t
    }

    /// Point at `t` along the straight chord
    pub fn point_on_chord(&self, t: f32) -> Vec3 {
        self.start.lerp(&self.end, t)
    }
}
