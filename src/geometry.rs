//! The triangle's vertex buffer and vertex array.
use std::mem::size_of;

use gl::types::{GLint, GLsizei, GLuint};

use crate::gl_wrappers::GlApi;

/// Number of f32 components per vertex (x, y, z).
pub const COMPONENTS_PER_VERTEX: usize = 3;

/// Left, right, top. Normalized device coordinates, z = 0.
#[rustfmt::skip]
pub const TRIANGLE_VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0,
     0.5, -0.5, 0.0,
     0.0,  0.5, 0.0,
];

/// Attribute location of the vertex position in the vertex shader.
const POSITION_ATTRIB: GLuint = 0;

/// GPU objects holding the triangle.
#[derive(Debug)]
pub struct Geometry {
    vao: GLuint,
    vbo: GLuint,
    vertex_count: GLsizei,
}

impl Geometry {
    /// Create the VAO and VBO and upload [`TRIANGLE_VERTICES`].
    ///
    /// The VAO has to be bound before the attribute pointer is set so it
    /// records the buffer binding. It stays bound afterwards; the array
    /// buffer target is reset.
    pub fn upload(gl: &impl GlApi) -> Self {
        let vao = gl.gen_vertex_array();
        let vbo = gl.gen_buffer();
        gl.bind_vertex_array(vao);
        log::info!("VBO: {vbo}, VAO: {vao}");

        gl.bind_buffer(gl::ARRAY_BUFFER, vbo);
        gl.buffer_data(
            gl::ARRAY_BUFFER,
            bytemuck::cast_slice(&TRIANGLE_VERTICES),
            gl::STATIC_DRAW,
        );
        gl.vertex_attrib_pointer(
            POSITION_ATTRIB,
            COMPONENTS_PER_VERTEX as GLint,
            gl::FLOAT,
            false,
            (COMPONENTS_PER_VERTEX * size_of::<f32>()) as GLsizei,
            0,
        );
        gl.enable_vertex_attrib_array(POSITION_ATTRIB);

        gl.bind_buffer(gl::ARRAY_BUFFER, 0);

        Self {
            vao,
            vbo,
            vertex_count: (TRIANGLE_VERTICES.len() / COMPONENTS_PER_VERTEX) as GLsizei,
        }
    }

    pub fn vao(&self) -> GLuint {
        self.vao
    }

    pub fn vbo(&self) -> GLuint {
        self.vbo
    }

    pub fn vertex_count(&self) -> GLsizei {
        self.vertex_count
    }

    pub fn bind(&self, gl: &impl GlApi) {
        gl.bind_vertex_array(self.vao);
    }
}
