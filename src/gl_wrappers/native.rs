//! Exports [`NativeGl`].
use std::{
    ffi::{c_void, CStr},
    ptr::null,
};

use gl::types::{GLbitfield, GLenum, GLint, GLsizei, GLsizeiptr, GLuint};

use super::GlApi;

/// [`GlApi`] backed by the globally loaded `gl` function table.
///
/// Only [`crate::loader::load_with`] hands these out, so holding one means the
/// function pointers have been resolved for the current context.
#[derive(Clone, Copy, Debug)]
pub struct NativeGl {
    _loaded: (),
}

impl NativeGl {
    /// # Safety
    /// Every function in [`crate::loader::REQUIRED_FUNCTIONS`] must be loaded,
    /// and a context must be current on this thread.
    pub(crate) unsafe fn assume_loaded() -> Self {
        Self { _loaded: () }
    }
}

fn buf_len(buf: &[u8]) -> GLsizei {
    GLsizei::try_from(buf.len()).unwrap_or(GLsizei::MAX)
}

fn written_len(written: GLsizei) -> usize {
    usize::try_from(written).unwrap_or(0)
}

// SAFETY (all methods below):
// `NativeGl` only exists once the functions are loaded and a context is
// current, and every pointer passed down comes from a live Rust borrow.
impl GlApi for NativeGl {
    fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        unsafe { gl::Viewport(x, y, width, height) }
    }

    fn create_shader(&self, kind: GLenum) -> GLuint {
        unsafe { gl::CreateShader(kind) }
    }

    fn shader_source(&self, shader: GLuint, source: &CStr) {
        unsafe { gl::ShaderSource(shader, 1, &source.as_ptr(), null()) }
    }

    fn compile_shader(&self, shader: GLuint) {
        unsafe { gl::CompileShader(shader) }
    }

    fn get_shader_iv(&self, shader: GLuint, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe { gl::GetShaderiv(shader, pname, &mut value) };
        value
    }

    fn get_shader_info_log(&self, shader: GLuint, buf: &mut [u8]) -> usize {
        let mut written = 0;
        unsafe { gl::GetShaderInfoLog(shader, buf_len(buf), &mut written, buf.as_mut_ptr().cast()) };
        written_len(written)
    }

    fn delete_shader(&self, shader: GLuint) {
        unsafe { gl::DeleteShader(shader) }
    }

    fn create_program(&self) -> GLuint {
        unsafe { gl::CreateProgram() }
    }

    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { gl::AttachShader(program, shader) }
    }

    fn link_program(&self, program: GLuint) {
        unsafe { gl::LinkProgram(program) }
    }

    fn get_program_iv(&self, program: GLuint, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe { gl::GetProgramiv(program, pname, &mut value) };
        value
    }

    fn get_program_info_log(&self, program: GLuint, buf: &mut [u8]) -> usize {
        let mut written = 0;
        unsafe { gl::GetProgramInfoLog(program, buf_len(buf), &mut written, buf.as_mut_ptr().cast()) };
        written_len(written)
    }

    fn use_program(&self, program: GLuint) {
        unsafe { gl::UseProgram(program) }
    }

    fn gen_vertex_array(&self) -> GLuint {
        let mut vao = 0;
        unsafe { gl::GenVertexArrays(1, &mut vao) };
        vao
    }

    fn gen_buffer(&self) -> GLuint {
        let mut vbo = 0;
        unsafe { gl::GenBuffers(1, &mut vbo) };
        vbo
    }

    fn bind_vertex_array(&self, vao: GLuint) {
        unsafe { gl::BindVertexArray(vao) }
    }

    fn bind_buffer(&self, target: GLenum, buffer: GLuint) {
        unsafe { gl::BindBuffer(target, buffer) }
    }

    fn buffer_data(&self, target: GLenum, data: &[u8], usage: GLenum) {
        // A slice never spans more than isize::MAX bytes.
        let size = data.len() as GLsizeiptr;
        unsafe { gl::BufferData(target, size, data.as_ptr().cast(), usage) }
    }

    fn vertex_attrib_pointer(
        &self,
        index: GLuint,
        size: GLint,
        kind: GLenum,
        normalized: bool,
        stride: GLsizei,
        offset: usize,
    ) {
        let normalized = if normalized { gl::TRUE } else { gl::FALSE };
        unsafe { gl::VertexAttribPointer(index, size, kind, normalized, stride, offset as *const c_void) }
    }

    fn enable_vertex_attrib_array(&self, index: GLuint) {
        unsafe { gl::EnableVertexAttribArray(index) }
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        unsafe { gl::ClearColor(red, green, blue, alpha) }
    }

    fn clear(&self, mask: GLbitfield) {
        unsafe { gl::Clear(mask) }
    }

    fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLsizei) {
        unsafe { gl::DrawArrays(mode, first, count) }
    }
}
