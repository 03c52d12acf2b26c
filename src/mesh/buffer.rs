use crate::math::Vec3;

/// Floats per interleaved vertex:
/// position(3) + normal(3) + color(3) + hover_color(3) + part(1) + pivot(3) + anchor(3) + phase(1)
pub const VERTEX_FLOATS: usize = 20;

/// Part slot used for scenery that is drawn but never picked or highlighted
pub const GROUND_SLOT: f32 = 4.0;

/// Per-shape attributes shared by every vertex the shape emits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexStyle {
    pub color: Vec3,
    pub hover_color: Vec3,
    /// `TreePart::index()` as a float, or `GROUND_SLOT`
    pub part_slot: f32,
    /// Leaf flutter pivot
    pub pivot: Vec3,
    /// Cluster sway center
    pub anchor: Vec3,
    /// Leaf flutter phase
    pub phase: f32,
}

impl VertexStyle {
    /// A style with no sway data, for rigid geometry
    pub fn solid(color: Vec3, hover_color: Vec3, part_slot: f32) -> Self {
        Self {
            color,
            hover_color,
            part_slot,
            pivot: Vec3::ZERO,
            anchor: Vec3::ZERO,
            phase: 0.0,
        }
    }

    pub fn with_sway(mut self, pivot: Vec3, anchor: Vec3, phase: f32) -> Self {
        self.pivot = pivot;
        self.anchor = anchor;
        self.phase = phase;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub style: VertexStyle,
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3, style: VertexStyle) -> Self {
        Self { position, normal, style }
    }

    pub fn to_array(&self) -> [f32; VERTEX_FLOATS] {
        let s = &self.style;
        [
            self.position.x, self.position.y, self.position.z,
            self.normal.x, self.normal.y, self.normal.z,
            s.color.x, s.color.y, s.color.z,
            s.hover_color.x, s.hover_color.y, s.hover_color.z,
            s.part_slot,
            s.pivot.x, s.pivot.y, s.pivot.z,
            s.anchor.x, s.anchor.y, s.anchor.z,
            s.phase,
        ]
    }
}

/// A mesh composed of vertices and triangle indices
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add vertices and return the starting index
    pub fn add_vertices(&mut self, verts: impl IntoIterator<Item = Vertex>) -> u32 {
        let start = self.vertices.len() as u32;
        self.vertices.extend(verts);
        start
    }

    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Add a quad as two triangles (CCW winding)
    pub fn add_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.add_triangle(a, b, c);
        self.add_triangle(a, c, d);
    }

    pub fn vertex_data(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.to_array()).collect()
    }

    pub fn index_data(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
