use web_sys::{WebGl2RenderingContext, WebGlBuffer, WebGlProgram, WebGlUniformLocation, WebGlVertexArrayObject};

use crate::animation::SwayParams;
use crate::math::{Mat4, Vec3};
use crate::mesh::Mesh;

use super::shaders::{TREE_FRAGMENT_SHADER, TREE_VERTEX_SHADER};
use super::webgl::{BufferData, WebGLContext};

/// Components per attribute: position, normal, color, hover color, part,
/// pivot, anchor, phase
const VERTEX_ATTRIBUTES: [i32; 8] = [3, 3, 3, 3, 1, 3, 3, 1];

/// Cached uniform locations for the tree shader
struct TreeUniforms {
    view: Option<WebGlUniformLocation>,
    projection: Option<WebGlUniformLocation>,
    time: Option<WebGlUniformLocation>,
    hover_mask: Option<WebGlUniformLocation>,
    leaf_sway: Option<WebGlUniformLocation>,
    cluster_sway: Option<WebGlUniformLocation>,
    camera_pos: Option<WebGlUniformLocation>,
    fog_color: Option<WebGlUniformLocation>,
    fog_range: Option<WebGlUniformLocation>,
}

/// Everything that changes between frames
#[derive(Debug, Clone, Copy)]
pub struct FrameParams {
    pub view: Mat4,
    pub projection: Mat4,
    pub camera_position: Vec3,
    pub time: f32,
    pub hover_mask: u32,
    pub sway: SwayParams,
}

/// Sky color and linear fog distances
#[derive(Debug, Clone, Copy)]
pub struct Atmosphere {
    pub sky: Vec3,
    pub fog_near: f32,
    pub fog_far: f32,
}

/// Single-pass forward renderer for the tree scene
pub struct RenderPipeline {
    ctx: WebGLContext,
    program: WebGlProgram,
    uniforms: TreeUniforms,
    atmosphere: Atmosphere,

    vao: Option<WebGlVertexArrayObject>,
    vertex_buffer: Option<WebGlBuffer>,
    index_buffer: Option<WebGlBuffer>,
    index_count: i32,

    width: i32,
    height: i32,
}

impl RenderPipeline {
    pub fn new(gl: WebGl2RenderingContext, width: i32, height: i32, atmosphere: Atmosphere) -> Result<Self, String> {
        let ctx = WebGLContext::new(gl);
        let program = ctx.create_program(TREE_VERTEX_SHADER, TREE_FRAGMENT_SHADER)?;

        let uniforms = TreeUniforms {
            view: ctx.get_uniform_location(&program, "u_view"),
            projection: ctx.get_uniform_location(&program, "u_projection"),
            time: ctx.get_uniform_location(&program, "u_time"),
            hover_mask: ctx.get_uniform_location(&program, "u_hover_mask"),
            leaf_sway: ctx.get_uniform_location(&program, "u_leaf_sway"),
            cluster_sway: ctx.get_uniform_location(&program, "u_cluster_sway"),
            camera_pos: ctx.get_uniform_location(&program, "u_camera_pos"),
            fog_color: ctx.get_uniform_location(&program, "u_fog_color"),
            fog_range: ctx.get_uniform_location(&program, "u_fog_range"),
        };

        Ok(Self {
            ctx,
            program,
            uniforms,
            atmosphere,
            vao: None,
            vertex_buffer: None,
            index_buffer: None,
            index_count: 0,
            width,
            height,
        })
    }

    /// Upload the scene mesh, replacing whatever was on the GPU before
    pub fn upload_mesh(&mut self, mesh: &Mesh) -> Result<(), String> {
        self.release_mesh();
        let gl = &self.ctx.gl;

        let vertex_data = mesh.vertex_data();
        let index_data = mesh.index_data();

        let vao = self.ctx.create_vao()?;
        gl.bind_vertex_array(Some(&vao));
        let vertex_buffer = self
            .ctx
            .create_buffer(BufferData::Vertices(&vertex_data), WebGl2RenderingContext::STATIC_DRAW)?;
        let index_buffer = self
            .ctx
            .create_buffer(BufferData::Indices(index_data), WebGl2RenderingContext::STATIC_DRAW)?;
        self.ctx.interleaved_attributes(&VERTEX_ATTRIBUTES);
        gl.bind_vertex_array(None);

        self.vao = Some(vao);
        self.vertex_buffer = Some(vertex_buffer);
        self.index_buffer = Some(index_buffer);
        self.index_count = index_data.len() as i32;
        log::debug!("Uploaded {} indices", self.index_count);
        Ok(())
    }

    fn release_mesh(&mut self) {
        self.ctx.delete_vao(self.vao.take());
        self.ctx.delete_buffer(self.vertex_buffer.take());
        self.ctx.delete_buffer(self.index_buffer.take());
        self.index_count = 0;
    }

    pub fn render(&self, frame: &FrameParams) {
        let sky = self.atmosphere.sky;
        self.ctx.begin_frame(self.width, self.height, sky);

        let Some(vao) = self.vao.as_ref() else {
            return;
        };

        let gl = &self.ctx.gl;
        gl.use_program(Some(&self.program));
        let u = &self.uniforms;
        self.ctx.uniform_mat4(u.view.as_ref(), &frame.view);
        self.ctx.uniform_mat4(u.projection.as_ref(), &frame.projection);
        self.ctx.uniform_f32(u.time.as_ref(), frame.time);
        self.ctx.uniform_u32(u.hover_mask.as_ref(), frame.hover_mask);

        let (leaf, cluster) = frame.sway.uniforms();
        self.ctx.uniform_vec2(u.leaf_sway.as_ref(), leaf);
        self.ctx.uniform_vec4(u.cluster_sway.as_ref(), cluster);

        self.ctx.uniform_vec3(u.camera_pos.as_ref(), frame.camera_position);
        self.ctx.uniform_vec3(u.fog_color.as_ref(), sky);
        self.ctx
            .uniform_vec2(u.fog_range.as_ref(), [self.atmosphere.fog_near, self.atmosphere.fog_far]);

        gl.bind_vertex_array(Some(vao));
        gl.draw_elements_with_i32(
            WebGl2RenderingContext::TRIANGLES,
            self.index_count,
            WebGl2RenderingContext::UNSIGNED_INT,
            0,
        );
        gl.bind_vertex_array(None);
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width.max(1);
        self.height = height.max(1);
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}
