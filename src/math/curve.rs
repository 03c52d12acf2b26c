use super::Vec3;

/// Quadratic Bézier through `start` and `end`, pulled toward `control`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    pub start: Vec3,
    pub control: Vec3,
    pub end: Vec3,
}

impl QuadraticBezier {
    pub fn new(start: Vec3, control: Vec3, end: Vec3) -> Self {
        Self { start, control, end }
    }

    /// Curve whose control point is the chord midpoint shifted by `offset`
    pub fn bowed(start: Vec3, end: Vec3, offset: Vec3) -> Self {
        Self::new(start, start.lerp(&end, 0.5) + offset, end)
    }

    pub fn evaluate(&self, t: f32) -> Vec3 {
        let u = 1.0 - t;
        self.start.scale(u * u) + self.control.scale(2.0 * u * t) + self.end.scale(t * t)
    }

    /// Unit tangent at `t`. Falls back to the chord for degenerate curves.
    pub fn tangent(&self, t: f32) -> Vec3 {
        let d = (self.control - self.start).scale(2.0 * (1.0 - t))
            + (self.end - self.control).scale(2.0 * t);
        if d.length_squared() > f32::EPSILON {
            d.normalize()
        } else {
            (self.end - self.start).normalize()
        }
    }

    /// `samples` evenly spaced parameter values including both ends
    pub fn sample(&self, samples: usize) -> Vec<(Vec3, Vec3)> {
        (0..samples)
            .map(|i| {
                let t = i as f32 / (samples - 1).max(1) as f32;
                (self.evaluate(t), self.tangent(t))
            })
            .collect()
    }
}

/// Cubic Bézier in the XY plane, used for flat outlines
pub fn cubic_bezier_2d(p0: [f32; 2], p1: [f32; 2], p2: [f32; 2], p3: [f32; 2], t: f32) -> [f32; 2] {
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * u * u * t;
    let b2 = 3.0 * u * t * t;
    let b3 = t * t * t;
    [
        b0 * p0[0] + b1 * p1[0] + b2 * p2[0] + b3 * p3[0],
        b0 * p0[1] + b1 * p1[1] + b2 * p2[1] + b3 * p3[1],
    ]
}
