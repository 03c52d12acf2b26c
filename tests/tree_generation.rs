use plant_tissue_explorer::content::TreePart;
use plant_tissue_explorer::growth::{leaf_color, SegmentShape, TreeModel, TreeParams};
use plant_tissue_explorer::interaction::OrbitConfig;
use plant_tissue_explorer::math::seeded_random;
use plant_tissue_explorer::mesh::{SceneBuilder, VERTEX_FLOATS};
use plant_tissue_explorer::viewer::TreeExplorer;

#[test]
fn default_tree_has_expected_shape() {
    let model = TreeModel::generate(TreeParams::default());
    assert_eq!(model.segments_of(TreePart::Bark).count(), 1);
    assert_eq!(model.segments_of(TreePart::Branches).count(), 15);
    assert_eq!(model.segments_of(TreePart::Leaves).count(), 10);
    assert_eq!(model.segments_of(TreePart::Roots).count(), 18);
    assert_eq!(model.leaf_count(), 203);
}

#[test]
fn equal_params_give_identical_geometry() {
    let params = TreeParams { seed: 1234, ..TreeParams::default() };
    let a = SceneBuilder::default().build(&TreeModel::generate(params.clone()));
    let b = SceneBuilder::default().build(&TreeModel::generate(params));
    assert_eq!(a.mesh.vertex_data(), b.mesh.vertex_data());
    assert_eq!(a.mesh.index_data(), b.mesh.index_data());
}

#[test]
fn different_seeds_move_branches_but_not_trunk() {
    let a = TreeModel::generate(TreeParams { seed: 1, ..TreeParams::default() });
    let b = TreeModel::generate(TreeParams { seed: 2, ..TreeParams::default() });
    let trunk = |m: &TreeModel| match &m.segments()[0].shape {
        SegmentShape::Trunk(profile) => profile.clone(),
        other => panic!("expected trunk, got {:?}", other),
    };
    assert_eq!(trunk(&a), trunk(&b));

    let branch_ends = |m: &TreeModel| {
        m.segments()
            .iter()
            .filter_map(|s| match &s.shape {
                SegmentShape::Branch(tube) => Some(tube.end),
                _ => None,
            })
            .collect::<Vec<_>>()
    };
    assert_ne!(branch_ends(&a), branch_ends(&b));
}

#[test]
fn every_segment_resolves_to_its_part() {
    let model = TreeModel::default();
    for segment in model.segments() {
        assert_eq!(model.part_of(segment.id), Some(segment.part));
        assert_eq!(segment.shape.part(), segment.part);
    }
}

#[test]
fn seeded_random_is_stable() {
    for seed in [0.0, 1.5, 850.0, -12.25] {
        let v = seeded_random(seed);
        assert_eq!(v, seeded_random(seed));
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn hover_changes_color_but_never_geometry() {
    let mut explorer =
        TreeExplorer::new(TreeParams::default(), OrbitConfig::default(), 800.0, 600.0).unwrap();
    let before = explorer.scene().mesh.vertex_data();
    assert_eq!(before.len() % VERTEX_FLOATS, 0);

    explorer.pointer_move(400.0, 300.0);
    assert!(explorer.is_hovered(TreePart::Bark));
    explorer.frame(1.0);
    assert_eq!(explorer.scene().mesh.vertex_data(), before);

    let model = explorer.model();
    let cluster = model
        .segments_of(TreePart::Leaves)
        .find_map(|s| match &s.shape {
            SegmentShape::LeafCluster(c) => Some(c),
            _ => None,
        })
        .unwrap();
    let leaf = &cluster.leaves[0];
    let (normal, hovered) = (leaf_color(leaf, false), leaf_color(leaf, true));
    assert!(hovered.x + hovered.y + hovered.z > normal.x + normal.y + normal.z);
}
