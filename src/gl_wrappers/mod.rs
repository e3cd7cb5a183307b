//! Thin wrappers around the OpenGL objects this program creates.
//!
//! Every GL call goes through [`GlApi`], so the order of calls can be
//! observed without a driver. [`NativeGl`] forwards to the `gl` crate.
use std::ffi::CStr;

use gl::types::{GLbitfield, GLenum, GLint, GLsizei, GLuint};

pub mod native;
pub mod program;
#[cfg(test)]
pub mod recording;
pub mod shader;

pub use native::NativeGl;
pub use program::Program;
pub use shader::{CompiledShader, Shader, ShaderType};

/// The subset of OpenGL used by the triangle demo.
///
/// Object-creating calls return the generated name directly instead of
/// filling an out-parameter.
pub trait GlApi {
    fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei);

    fn create_shader(&self, kind: GLenum) -> GLuint;
    fn shader_source(&self, shader: GLuint, source: &CStr);
    fn compile_shader(&self, shader: GLuint);
    fn get_shader_iv(&self, shader: GLuint, pname: GLenum) -> GLint;
    /// Fill `buf` with the shader info log and return the number of bytes
    /// written, excluding the nul terminator.
    fn get_shader_info_log(&self, shader: GLuint, buf: &mut [u8]) -> usize;
    fn delete_shader(&self, shader: GLuint);

    fn create_program(&self) -> GLuint;
    fn attach_shader(&self, program: GLuint, shader: GLuint);
    fn link_program(&self, program: GLuint);
    fn get_program_iv(&self, program: GLuint, pname: GLenum) -> GLint;
    /// Same contract as [`GlApi::get_shader_info_log`], for programs.
    fn get_program_info_log(&self, program: GLuint, buf: &mut [u8]) -> usize;
    fn use_program(&self, program: GLuint);

    fn gen_vertex_array(&self) -> GLuint;
    fn gen_buffer(&self) -> GLuint;
    fn bind_vertex_array(&self, vao: GLuint);
    fn bind_buffer(&self, target: GLenum, buffer: GLuint);
    fn buffer_data(&self, target: GLenum, data: &[u8], usage: GLenum);
    fn vertex_attrib_pointer(
        &self,
        index: GLuint,
        size: GLint,
        kind: GLenum,
        normalized: bool,
        stride: GLsizei,
        offset: usize,
    );
    fn enable_vertex_attrib_array(&self, index: GLuint);

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32);
    fn clear(&self, mask: GLbitfield);
    fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLsizei);
}

/// Update the viewport to cover a `width` x `height` framebuffer.
pub fn gl_upd_viewport(gl: &impl GlApi, width: u32, height: u32) {
    let real_width = GLsizei::try_from(width).unwrap_or(GLsizei::MAX);
    let real_height = GLsizei::try_from(height).unwrap_or(GLsizei::MAX);
    gl.viewport(0, 0, real_width, real_height);
}

/// Read an info log whose length (nul terminator included) is `log_length`.
///
/// The buffer is sized exactly to `log_length`, then `fetch` fills it.
pub(crate) fn read_info_log(log_length: GLint, fetch: impl FnOnce(&mut [u8]) -> usize) -> String {
    let mut infolog = vec![0; usize::try_from(log_length).unwrap_or(0)];
    let written = fetch(&mut infolog).min(infolog.len());
    infolog.truncate(written);
    String::from_utf8_lossy(&infolog).trim_end().to_owned()
}
