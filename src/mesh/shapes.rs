//! Surface builders. Each appends triangles for one primitive to a `Mesh`.

use std::f32::consts::TAU;

use crate::growth::{TrunkProfile, TubeSegment};
use crate::math::{cubic_bezier_2d, Mat4, Vec3};

use super::buffer::{Mesh, Vertex, VertexStyle};

/// Samples per cubic in the leaf outline
const LEAF_CURVE_SEGMENTS: usize = 8;

/// Leaf outline as four cubic Béziers: right edge, right tip, left tip, left edge
const LEAF_CURVES: [[[f32; 2]; 4]; 4] = [
    [[0.0, 0.0], [0.06, 0.15], [0.12, 0.35], [0.08, 0.5]],
    [[0.08, 0.5], [0.04, 0.58], [0.02, 0.62], [0.0, 0.65]],
    [[0.0, 0.65], [-0.02, 0.62], [-0.04, 0.58], [-0.08, 0.5]],
    [[-0.08, 0.5], [-0.12, 0.35], [-0.06, 0.15], [0.0, 0.0]],
];

/// Interior point every outline vertex can see
const LEAF_FAN_CENTER: [f32; 2] = [0.0, 0.3];

/// Ring of vertices around `center` in the plane spanned by `u` and `v`
pub fn create_ring(center: Vec3, u: Vec3, v: Vec3, radius: f32, segments: usize, style: VertexStyle) -> Vec<Vertex> {
    (0..segments)
        .map(|i| {
            let angle = i as f32 / segments as f32 * TAU;
            let offset = u.scale(angle.cos()) + v.scale(angle.sin());
            Vertex::new(center + offset.scale(radius), offset.normalize(), style)
        })
        .collect()
}

/// Connect two equally sized rings with quads
pub fn connect_rings(mesh: &mut Mesh, ring1_start: u32, ring2_start: u32, segments: usize) {
    for i in 0..segments {
        let next = (i + 1) % segments;
        mesh.add_quad(
            ring1_start + i as u32,
            ring2_start + i as u32,
            ring2_start + next as u32,
            ring1_start + next as u32,
        );
    }
}

/// Tapered tube swept along the segment's curve. Ring frames are carried
/// along by parallel transport so the surface never twists.
pub fn append_tube(mesh: &mut Mesh, segment: &TubeSegment, tubular: usize, radial: usize, style: VertexStyle) {
    let samples = segment.curve().sample(tubular + 1);
    let Some(&(_, first_tangent)) = samples.first() else {
        return;
    };

    let mut normal = first_tangent.perpendicular();
    let mut previous: Option<u32> = None;
    for (i, (point, tangent)) in samples.iter().enumerate() {
        let projected = normal - tangent.scale(normal.dot(tangent));
        if projected.length_squared() > f32::EPSILON {
            normal = projected.normalize();
        }
        let binormal = tangent.cross(&normal).normalize();
        let t = i as f32 / tubular.max(1) as f32;

        let ring = create_ring(*point, normal, binormal, segment.radius_at(t), radial, style);
        let start = mesh.add_vertices(ring);
        if let Some(prev) = previous {
            connect_rings(mesh, prev, start, radial);
        }
        previous = Some(start);
    }
}

/// Revolve the trunk profile around the Y axis
pub fn append_lathe(mesh: &mut Mesh, profile: &TrunkProfile, segments: usize, style: VertexStyle) {
    let points = &profile.points;
    let mut previous: Option<u32> = None;

    for (i, point) in points.iter().enumerate() {
        let before = points[i.saturating_sub(1)];
        let after = points[(i + 1).min(points.len() - 1)];
        // outward normal of the profile curve in the (radius, y) plane
        let (dr, dy) = (after.radius - before.radius, after.y - before.y);
        let len = (dr * dr + dy * dy).sqrt().max(f32::EPSILON);
        let (nr, ny) = (dy / len, -dr / len);

        let ring = (0..segments).map(|k| {
            let angle = k as f32 / segments as f32 * TAU;
            let position = Vec3::on_circle(angle, point.radius, point.y);
            let normal = Vec3::new(angle.cos() * nr, ny, angle.sin() * nr);
            Vertex::new(position, normal, style)
        });
        let start = mesh.add_vertices(ring);
        if let Some(prev) = previous {
            connect_rings(mesh, prev, start, segments);
        }
        previous = Some(start);
    }
}

/// Closed leaf outline in the local XY plane, base at the origin
pub fn leaf_outline() -> Vec<[f32; 2]> {
    LEAF_CURVES
        .iter()
        .flat_map(|[p0, p1, p2, p3]| {
            (0..LEAF_CURVE_SEGMENTS).map(move |i| {
                let t = i as f32 / LEAF_CURVE_SEGMENTS as f32;
                cubic_bezier_2d(*p0, *p1, *p2, *p3, t)
            })
        })
        .collect()
}

/// Fan-triangulated flat leaf placed by `transform`
pub fn append_leaf(mesh: &mut Mesh, outline: &[[f32; 2]], transform: &Mat4, style: VertexStyle) {
    if outline.len() < 3 {
        return;
    }
    let normal = transform.transform_direction(Vec3::FORWARD).normalize();
    let place = |p: [f32; 2]| Vertex::new(transform.transform_point(Vec3::new(p[0], p[1], 0.0)), normal, style);

    let center = mesh.add_vertices(std::iter::once(place(LEAF_FAN_CENTER)));
    let rim = mesh.add_vertices(outline.iter().copied().map(place));
    let n = outline.len() as u32;
    for i in 0..n {
        mesh.add_triangle(center, rim + i, rim + (i + 1) % n);
    }
}

/// Horizontal annulus at height `y`. An inner radius of zero gives a disc.
pub fn append_annulus(mesh: &mut Mesh, y: f32, inner: f32, outer: f32, segments: usize, style: VertexStyle) {
    let ring = |radius: f32| {
        (0..segments).map(move |k| {
            let angle = k as f32 / segments as f32 * TAU;
            Vertex::new(Vec3::on_circle(angle, radius, y), Vec3::UP, style)
        })
    };

    let outer_start = mesh.add_vertices(ring(outer));
    if inner <= 0.0 {
        let center = mesh.add_vertices(std::iter::once(Vertex::new(Vec3::new(0.0, y, 0.0), Vec3::UP, style)));
        for k in 0..segments as u32 {
            mesh.add_triangle(center, outer_start + (k + 1) % segments as u32, outer_start + k);
        }
    } else {
        let inner_start = mesh.add_vertices(ring(inner));
        connect_rings(mesh, inner_start, outer_start, segments);
    }
}
