use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::math::Vec3;

/// Primary limb descriptor, relative to the trunk axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BranchSpec {
    /// Height on the trunk where the limb starts
    pub height: f32,
    /// Azimuth around the trunk (radians)
    pub angle: f32,
    /// Horizontal reach of the limb tip
    pub length: f32,
    /// Rise of the tip above the start height
    pub tilt: f32,
}

/// Leaf cluster anchor with its radius and leaf count
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterSpec {
    pub anchor: Vec3,
    pub size: f32,
    pub density: usize,
}

/// Everything the tree generator depends on. Geometry is a pure function
/// of these values; equal params always produce equal trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeParams {
    /// Base key for every random draw
    pub seed: u64,
    /// Number of trunk profile intervals (stations = intervals + 1)
    pub trunk_stations: usize,
    pub main_branches: Vec<BranchSpec>,
    pub leaf_clusters: Vec<ClusterSpec>,
    pub root_count: usize,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            seed: 0,
            trunk_stations: 20,
            main_branches: vec![
                BranchSpec { height: 1.8, angle: 0.4, length: 1.1, tilt: 0.5 },
                BranchSpec { height: 2.0, angle: PI * 0.5, length: 0.9, tilt: 0.4 },
                BranchSpec { height: 1.5, angle: PI, length: 1.0, tilt: 0.55 },
                BranchSpec { height: 2.2, angle: PI * 1.3, length: 0.85, tilt: 0.45 },
                BranchSpec { height: 1.7, angle: PI * 1.7, length: 0.95, tilt: 0.5 },
            ],
            leaf_clusters: vec![
                cluster(0.85, 2.5, 0.3, 0.55, 22),
                cluster(-0.65, 2.7, 0.35, 0.5, 20),
                cluster(0.2, 2.9, -0.55, 0.6, 24),
                cluster(-0.5, 2.3, -0.5, 0.45, 18),
                cluster(0.55, 2.2, 0.5, 0.5, 20),
                cluster(-0.75, 2.1, 0.1, 0.48, 19),
                cluster(0.0, 3.1, 0.0, 0.65, 26),
                cluster(0.4, 2.6, -0.35, 0.45, 18),
                cluster(-0.3, 2.55, 0.45, 0.5, 20),
                cluster(0.6, 2.0, -0.25, 0.4, 16),
            ],
            root_count: 6,
        }
    }
}

fn cluster(x: f32, y: f32, z: f32, size: f32, density: usize) -> ClusterSpec {
    ClusterSpec { anchor: Vec3::new(x, y, z), size, density }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = TreeParams::default();
        assert_eq!(params.main_branches.len(), 5);
        assert_eq!(params.leaf_clusters.len(), 10);
        assert_eq!(params.leaf_clusters.iter().map(|c| c.density).sum::<usize>(), 203);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let params: TreeParams = serde_yaml::from_str("seed: 7\nroot_count: 4").unwrap();
        assert_eq!(params.seed, 7);
        assert_eq!(params.root_count, 4);
        assert_eq!(params.main_branches, TreeParams::default().main_branches);
    }
}
