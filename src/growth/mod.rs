//! Deterministic tree generation: trunk profile, limbs, leaf clusters and
//! roots, each segment tagged with the tree part it belongs to.

mod branches;
mod leaves;
mod model;
mod params;
mod roots;
mod segment;
mod trunk;

pub use branches::{generate_branches, Limb};
pub use leaves::{leaf_color, Leaf, LeafCluster};
pub use model::{Segment, SegmentId, SegmentShape, TreeModel};
pub use params::{BranchSpec, ClusterSpec, TreeParams};
pub use roots::{generate_roots, Root};
pub use segment::TubeSegment;
pub use trunk::{trunk_radius, ProfilePoint, TrunkProfile, TRUNK_BASE_Y, TRUNK_HEIGHT};

use crate::math::Seed;

const BRANCH_STREAM: u64 = 1;
const ROOT_STREAM: u64 = 2;
const LEAF_STREAM: u64 = 3;

/// Draw in `[0, 1)` keyed on (stream, element, sub-element, salt)
fn keyed(seed: Seed, stream: u64, index: usize, sub: usize, salt: u64) -> f32 {
    seed.mix(stream)
        .mix(index as u64)
        .mix(sub as u64)
        .mix(salt)
        .unit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_do_not_alias() {
        let seed = Seed::new(0);
        // (0, 1) vs (1, 0) and branch vs root streams must all differ
        let a = keyed(seed, BRANCH_STREAM, 0, 1, 0);
        let b = keyed(seed, BRANCH_STREAM, 1, 0, 0);
        let c = keyed(seed, ROOT_STREAM, 0, 1, 0);
        assert!(a != b && a != c && b != c);
    }
}
