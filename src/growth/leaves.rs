use std::f32::consts::{PI, TAU};

use crate::math::{hsl_to_rgb, Seed, Vec3};

use super::params::ClusterSpec;
use super::LEAF_STREAM;

/// Vertical squash applied to cluster volumes
const FLATTEN: f32 = 0.8;
/// Pick sphere radius relative to cluster size
const PICK_SCALE: f32 = 1.2;

/// One leaf, placed relative to its cluster anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leaf {
    pub position: Vec3,
    /// Euler XYZ angles
    pub rotation: Vec3,
    pub scale: f32,
    /// Hue in degrees
    pub hue: f32,
    /// Lightness variation in `[0, 1)`
    pub tone: f32,
}

impl Leaf {
    /// Phase offset of this leaf's flutter
    pub fn sway_phase(&self) -> f32 {
        self.position.x * 5.0
    }
}

/// Displayed leaf color. Hover only brightens; nothing else about the leaf
/// depends on it.
pub fn leaf_color(leaf: &Leaf, hovered: bool) -> Vec3 {
    let base = if hovered { 45.0 } else { 28.0 };
    hsl_to_rgb(leaf.hue, 65.0, base + leaf.tone * 15.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeafCluster {
    pub anchor: Vec3,
    pub size: f32,
    pub leaves: Vec<Leaf>,
}

impl LeafCluster {
    pub fn generate(seed: Seed, spec: &ClusterSpec) -> Self {
        let base_key = f64::from(spec.anchor.x) * 1000.0 + f64::from(spec.anchor.z) * 100.0;
        let stream = seed.mix(LEAF_STREAM);
        let leaves = (0..spec.density)
            .map(|k| {
                let key = base_key + k as f64;
                let r = |salt: f64| stream.mix_f64(key + salt).unit();

                let azimuth = r(0.0) * TAU;
                let inclination = (2.0 * r(0.1) - 1.0).clamp(-1.0, 1.0).acos();
                let radius = spec.size * (0.3 + r(0.2) * 0.7);
                let mut position = Vec3::from_spherical(radius, inclination, azimuth);
                position.y *= FLATTEN;

                Leaf {
                    position,
                    rotation: Vec3::new(r(0.5) * PI * 0.5, azimuth, r(0.6) * PI * 0.3),
                    scale: 0.8 + r(0.7) * 0.6,
                    hue: 100.0 + r(0.3) * 30.0,
                    tone: r(0.4),
                }
            })
            .collect();

        Self {
            anchor: spec.anchor,
            size: spec.size,
            leaves,
        }
    }

    pub fn pick_radius(&self) -> f32 {
        self.size * PICK_SCALE
    }

    /// Phase offsets of the slow whole-cluster sway, as (x-axis, y-axis)
    pub fn sway_phase(&self) -> (f32, f32) {
        (self.anchor.z, self.anchor.x)
    }
}
