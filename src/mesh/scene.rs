use crate::content::TreePart;
use crate::growth::{leaf_color, LeafCluster, SegmentId, SegmentShape, TreeModel, TrunkProfile, TubeSegment};
use crate::interaction::PickShape;
use crate::math::{Mat4, Vec3};

use super::buffer::{Mesh, VertexStyle, GROUND_SLOT};
use super::palette;
use super::shapes::{append_annulus, append_lathe, append_leaf, append_tube, leaf_outline};

/// Tessellation density of every generated surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshParams {
    pub lathe_segments: usize,
    /// (tubular, radial)
    pub branch_tube: (usize, usize),
    pub root_tube: (usize, usize),
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            lathe_segments: 16,
            branch_tube: (12, 8),
            root_tube: (8, 6),
        }
    }
}

/// Where one segment's triangles live in the combined index buffer
#[derive(Debug, Clone, PartialEq)]
pub struct PartMeshInfo {
    pub segment: SegmentId,
    pub part: TreePart,
    pub index_start: u32,
    pub index_count: u32,
    /// Hit volumes whose union covers the segment's triangles
    pub picks: Vec<PickShape>,
}

/// All tree geometry in one buffer, plus the non-pickable ground
#[derive(Debug, Clone, Default)]
pub struct TreeScene {
    pub mesh: Mesh,
    pub parts: Vec<PartMeshInfo>,
}

impl TreeScene {
    pub fn pick_targets(&self) -> Vec<(SegmentId, PickShape)> {
        self.parts
            .iter()
            .flat_map(|p| p.picks.iter().map(move |shape| (p.segment, *shape)))
            .collect()
    }
}

/// Slack added to pick radii so vertices on a surface test as inside
const PICK_MARGIN: f32 = 1.02;

/// Midrib length and widest distance from the midrib of a leaf outline
fn outline_reach(outline: &[[f32; 2]]) -> (f32, f32) {
    let tip = outline.iter().map(|p| p[1]).fold(0.0, f32::max);
    let width = outline
        .iter()
        .map(|&[x, y]| {
            let along = y.clamp(0.0, tip);
            (x * x + (y - along) * (y - along)).sqrt()
        })
        .fold(0.0, f32::max);
    (tip, width)
}

pub struct SceneBuilder {
    params: MeshParams,
    leaf_outline: Vec<[f32; 2]>,
    leaf_tip: f32,
    leaf_half_width: f32,
}

impl SceneBuilder {
    pub fn new(params: MeshParams) -> Self {
        let leaf_outline = leaf_outline();
        let (leaf_tip, leaf_half_width) = outline_reach(&leaf_outline);
        Self {
            params,
            leaf_outline,
            leaf_tip,
            leaf_half_width,
        }
    }

    pub fn build(&self, model: &TreeModel) -> TreeScene {
        let mut mesh = Mesh::new();
        let mut parts = Vec::with_capacity(model.segments().len());

        for segment in model.segments() {
            let index_start = mesh.indices.len() as u32;
            let picks = match &segment.shape {
                SegmentShape::Trunk(profile) => self.trunk(&mut mesh, profile),
                SegmentShape::Branch(tube) => {
                    self.tube(&mut mesh, tube, TreePart::Branches, self.params.branch_tube)
                }
                SegmentShape::Root(tube) => self.tube(&mut mesh, tube, TreePart::Roots, self.params.root_tube),
                SegmentShape::LeafCluster(cluster) => self.cluster(&mut mesh, cluster),
            };
            parts.push(PartMeshInfo {
                segment: segment.id,
                part: segment.part,
                index_start,
                index_count: mesh.indices.len() as u32 - index_start,
                picks,
            });
        }

        append_ground(&mut mesh);
        log::debug!(
            "Built tree mesh: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        TreeScene { mesh, parts }
    }

    /// One capsule per profile interval, as wide as its thicker station
    fn trunk(&self, mesh: &mut Mesh, profile: &TrunkProfile) -> Vec<PickShape> {
        let (color, hover) = palette::wood_colors(TreePart::Bark);
        let style = VertexStyle::solid(color, hover, TreePart::Bark.index() as f32);
        append_lathe(mesh, profile, self.params.lathe_segments, style);
        profile
            .points
            .windows(2)
            .map(|pair| PickShape::Capsule {
                a: Vec3::new(0.0, pair[0].y, 0.0),
                b: Vec3::new(0.0, pair[1].y, 0.0),
                radius: pair[0].radius.max(pair[1].radius) * PICK_MARGIN,
            })
            .collect()
    }

    /// One capsule between each pair of rings the tube was swept through
    fn tube(
        &self,
        mesh: &mut Mesh,
        tube: &TubeSegment,
        part: TreePart,
        (tubular, radial): (usize, usize),
    ) -> Vec<PickShape> {
        let (color, hover) = palette::wood_colors(part);
        let style = VertexStyle::solid(color, hover, part.index() as f32);
        append_tube(mesh, tube, tubular, radial, style);

        let steps = tubular.max(1);
        let rings: Vec<(Vec3, f32)> = tube
            .curve()
            .sample(tubular + 1)
            .into_iter()
            .enumerate()
            .map(|(i, (point, _))| (point, tube.radius_at(i as f32 / steps as f32)))
            .collect();
        rings
            .windows(2)
            .map(|pair| PickShape::Capsule {
                a: pair[0].0,
                b: pair[1].0,
                radius: pair[0].1.max(pair[1].1) * PICK_MARGIN,
            })
            .collect()
    }

    /// The cluster body sphere plus a capsule along each leaf's midrib
    fn cluster(&self, mesh: &mut Mesh, cluster: &LeafCluster) -> Vec<PickShape> {
        let slot = TreePart::Leaves.index() as f32;
        let mut picks = Vec::with_capacity(cluster.leaves.len() + 1);
        picks.push(PickShape::Sphere {
            center: cluster.anchor,
            radius: cluster.pick_radius(),
        });

        for leaf in &cluster.leaves {
            let pivot = cluster.anchor + leaf.position;
            let style = VertexStyle::solid(leaf_color(leaf, false), leaf_color(leaf, true), slot)
                .with_sway(pivot, cluster.anchor, leaf.sway_phase());
            let transform = Mat4::compose(pivot, leaf.rotation, leaf.scale);
            append_leaf(mesh, &self.leaf_outline, &transform, style);
            picks.push(PickShape::Capsule {
                a: pivot,
                b: transform.transform_point(Vec3::new(0.0, self.leaf_tip, 0.0)),
                radius: self.leaf_half_width * leaf.scale * PICK_MARGIN,
            });
        }
        picks
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new(MeshParams::default())
    }
}

/// Grass disc with soil rings around the trunk base
fn append_ground(mesh: &mut Mesh) {
    let flat = |color: Vec3| VertexStyle::solid(color, color, GROUND_SLOT);
    append_annulus(mesh, -1.52, 0.0, 5.0, 48, flat(palette::grass()));
    append_annulus(mesh, -1.51, 0.35, 1.2, 32, flat(palette::soil()));
    append_annulus(mesh, -1.505, 1.2, 2.0, 32, flat(palette::loose_soil()));
}
