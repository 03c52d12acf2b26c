use crate::content::TreePart;
use crate::math::Seed;

use super::branches::generate_branches;
use super::leaves::LeafCluster;
use super::params::TreeParams;
use super::roots::generate_roots;
use super::segment::TubeSegment;
use super::trunk::TrunkProfile;

/// Index of a generated segment inside its `TreeModel`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub u32);

#[derive(Debug, Clone, PartialEq)]
pub enum SegmentShape {
    Trunk(TrunkProfile),
    Branch(TubeSegment),
    LeafCluster(LeafCluster),
    Root(TubeSegment),
}

impl SegmentShape {
    pub fn part(&self) -> TreePart {
        match self {
            SegmentShape::Trunk(_) => TreePart::Bark,
            SegmentShape::Branch(_) => TreePart::Branches,
            SegmentShape::LeafCluster(_) => TreePart::Leaves,
            SegmentShape::Root(_) => TreePart::Roots,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub id: SegmentId,
    pub part: TreePart,
    pub shape: SegmentShape,
}

/// The complete generated tree. Segments are stored in id order, so
/// resolving an id is a direct index.
#[derive(Debug, Clone)]
pub struct TreeModel {
    params: TreeParams,
    segments: Vec<Segment>,
}

impl TreeModel {
    pub fn generate(params: TreeParams) -> Self {
        let seed = Seed::new(params.seed);

        let mut shapes = vec![SegmentShape::Trunk(TrunkProfile::generate(params.trunk_stations))];
        for limb in generate_branches(seed, &params.main_branches) {
            shapes.extend(limb.segments().copied().map(SegmentShape::Branch));
        }
        shapes.extend(
            params
                .leaf_clusters
                .iter()
                .map(|spec| SegmentShape::LeafCluster(LeafCluster::generate(seed, spec))),
        );
        for root in generate_roots(seed, params.root_count) {
            shapes.extend(root.segments().copied().map(SegmentShape::Root));
        }

        let segments: Vec<Segment> = shapes
            .into_iter()
            .enumerate()
            .map(|(i, shape)| Segment {
                id: SegmentId(i as u32),
                part: shape.part(),
                shape,
            })
            .collect();

        let model = Self { params, segments };
        log::info!(
            "Generated tree: {} segments, {} leaves (seed {})",
            model.segments.len(),
            model.leaf_count(),
            model.params.seed
        );
        model
    }

    /// Regenerate if `params` differ from the current ones. Returns whether
    /// anything changed.
    pub fn update(&mut self, params: TreeParams) -> bool {
        if params == self.params {
            return false;
        }
        *self = Self::generate(params);
        true
    }

    pub fn params(&self) -> &TreeParams {
        &self.params
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(id.0 as usize)
    }

    pub fn part_of(&self, id: SegmentId) -> Option<TreePart> {
        self.segment(id).map(|s| s.part)
    }

    pub fn segments_of(&self, part: TreePart) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(move |s| s.part == part)
    }

    pub fn leaf_count(&self) -> usize {
        self.segments
            .iter()
            .map(|s| match &s.shape {
                SegmentShape::LeafCluster(cluster) => cluster.leaves.len(),
                _ => 0,
            })
            .sum()
    }
}

impl Default for TreeModel {
    fn default() -> Self {
        Self::generate(TreeParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_counts_per_part() {
        let model = TreeModel::default();
        assert_eq!(model.segments_of(TreePart::Bark).count(), 1);
        assert_eq!(model.segments_of(TreePart::Branches).count(), 15);
        assert_eq!(model.segments_of(TreePart::Leaves).count(), 10);
        assert_eq!(model.segments_of(TreePart::Roots).count(), 18);
        assert_eq!(model.leaf_count(), 203);
    }

    #[test]
    fn test_part_of_matches_shape() {
        let model = TreeModel::default();
        for segment in model.segments() {
            assert_eq!(model.part_of(segment.id), Some(segment.shape.part()));
        }
        assert_eq!(model.part_of(SegmentId(9_999)), None);
    }

    #[test]
    fn test_update_only_on_change() {
        let mut model = TreeModel::default();
        let before = model.segments().to_vec();
        assert!(!model.update(TreeParams::default()));
        assert_eq!(model.segments(), &before[..]);

        let params = TreeParams { seed: 99, ..TreeParams::default() };
        assert!(model.update(params));
        assert_ne!(model.segments(), &before[..]);
        assert_eq!(model.params().seed, 99);
    }

    #[test]
    fn test_same_params_same_tree() {
        let a = TreeModel::generate(TreeParams { seed: 17, ..TreeParams::default() });
        let b = TreeModel::generate(TreeParams { seed: 17, ..TreeParams::default() });
        assert_eq!(a.segments(), b.segments());
    }
}
