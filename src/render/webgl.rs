use web_sys::{
    WebGl2RenderingContext, WebGlBuffer, WebGlProgram, WebGlShader, WebGlUniformLocation,
    WebGlVertexArrayObject,
};

use crate::math::{Mat4, Vec3};

type Gl = WebGl2RenderingContext;

/// Data for one GPU buffer; the variant picks the binding target
#[derive(Debug, Clone, Copy)]
pub enum BufferData<'a> {
    Vertices(&'a [f32]),
    Indices(&'a [u32]),
}

impl BufferData<'_> {
    fn target(&self) -> u32 {
        match self {
            BufferData::Vertices(_) => Gl::ARRAY_BUFFER,
            BufferData::Indices(_) => Gl::ELEMENT_ARRAY_BUFFER,
        }
    }
}

/// Wrapper around the WebGL2 context with the calls the tree renderer needs
pub struct WebGLContext {
    pub gl: Gl,
}

impl WebGLContext {
    pub fn new(gl: Gl) -> Self {
        Self { gl }
    }

    fn compile_shader(&self, shader_type: u32, source: &str) -> Result<WebGlShader, String> {
        let gl = &self.gl;

        let shader = gl.create_shader(shader_type).ok_or("Failed to create shader")?;
        gl.shader_source(&shader, source);
        gl.compile_shader(&shader);

        let compiled = gl
            .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false);
        if compiled {
            return Ok(shader);
        }
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        let stage = if shader_type == Gl::VERTEX_SHADER { "vertex" } else { "fragment" };
        Err(format!("{} shader compilation failed: {}", stage, log))
    }

    /// Compile and link a vertex/fragment pair
    pub fn create_program(&self, vert_src: &str, frag_src: &str) -> Result<WebGlProgram, String> {
        let gl = &self.gl;

        let vert = self.compile_shader(Gl::VERTEX_SHADER, vert_src)?;
        let frag = self.compile_shader(Gl::FRAGMENT_SHADER, frag_src)?;

        let program = gl.create_program().ok_or("Failed to create program")?;
        gl.attach_shader(&program, &vert);
        gl.attach_shader(&program, &frag);
        gl.link_program(&program);
        gl.delete_shader(Some(&vert));
        gl.delete_shader(Some(&frag));

        let linked = gl
            .get_program_parameter(&program, Gl::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        if linked {
            return Ok(program);
        }
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(format!("Program linking failed: {}", log))
    }

    /// Create a buffer, upload `data` and leave it bound to its target.
    /// Binding an index buffer while a VAO is bound records it in the VAO.
    pub fn create_buffer(&self, data: BufferData<'_>, usage: u32) -> Result<WebGlBuffer, String> {
        let gl = &self.gl;
        let target = data.target();

        let buffer = gl.create_buffer().ok_or("Failed to create buffer")?;
        gl.bind_buffer(target, Some(&buffer));

        // Safety: each view is handed to buffer_data before anything can
        // allocate in the wasm heap and invalidate it
        unsafe {
            match data {
                BufferData::Vertices(values) => {
                    gl.buffer_data_with_array_buffer_view(target, &js_sys::Float32Array::view(values), usage)
                }
                BufferData::Indices(values) => {
                    gl.buffer_data_with_array_buffer_view(target, &js_sys::Uint32Array::view(values), usage)
                }
            }
        }
        Ok(buffer)
    }

    pub fn create_vao(&self) -> Result<WebGlVertexArrayObject, String> {
        self.gl.create_vertex_array().ok_or_else(|| "Failed to create VAO".to_string())
    }

    pub fn delete_buffer(&self, buffer: Option<WebGlBuffer>) {
        if let Some(buffer) = buffer {
            self.gl.delete_buffer(Some(&buffer));
        }
    }

    pub fn delete_vao(&self, vao: Option<WebGlVertexArrayObject>) {
        if let Some(vao) = vao {
            self.gl.delete_vertex_array(Some(&vao));
        }
    }

    /// Interleaved float attributes of the given component counts, bound to
    /// locations 0.. in order
    pub fn interleaved_attributes(&self, sizes: &[i32]) {
        let stride: i32 = sizes.iter().sum::<i32>() * 4;
        let mut offset = 0;
        for (location, &size) in sizes.iter().enumerate() {
            let location = location as u32;
            self.gl.enable_vertex_attrib_array(location);
            self.gl
                .vertex_attrib_pointer_with_i32(location, size, Gl::FLOAT, false, stride, offset);
            offset += size * 4;
        }
    }

    pub fn get_uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.gl.get_uniform_location(program, name)
    }

    pub fn uniform_f32(&self, location: Option<&WebGlUniformLocation>, value: f32) {
        self.gl.uniform1f(location, value);
    }

    pub fn uniform_u32(&self, location: Option<&WebGlUniformLocation>, value: u32) {
        self.gl.uniform1ui(location, value);
    }

    pub fn uniform_vec2(&self, location: Option<&WebGlUniformLocation>, v: [f32; 2]) {
        self.gl.uniform2f(location, v[0], v[1]);
    }

    pub fn uniform_vec3(&self, location: Option<&WebGlUniformLocation>, v: Vec3) {
        self.gl.uniform3f(location, v.x, v.y, v.z);
    }

    pub fn uniform_vec4(&self, location: Option<&WebGlUniformLocation>, v: [f32; 4]) {
        self.gl.uniform4f(location, v[0], v[1], v[2], v[3]);
    }

    pub fn uniform_mat4(&self, location: Option<&WebGlUniformLocation>, m: &Mat4) {
        self.gl.uniform_matrix4fv_with_f32_array(location, false, m.as_slice());
    }

    /// Reset the frame: viewport, sky clear, depth test on and culling off
    /// (leaves are single-sided quads seen from both sides)
    pub fn begin_frame(&self, width: i32, height: i32, sky: Vec3) {
        let gl = &self.gl;
        gl.viewport(0, 0, width, height);
        gl.clear_color(sky.x, sky.y, sky.z, 1.0);
        gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);
        gl.enable(Gl::DEPTH_TEST);
        gl.disable(Gl::CULL_FACE);
    }
}
