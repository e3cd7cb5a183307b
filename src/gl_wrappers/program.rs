//! Exports [`Program`].
use gl::types::{GLint, GLuint};

use super::{read_info_log, CompiledShader, GlApi};
use crate::error::ShaderError;

/// Wrapper for an OpenGL program.
///
/// <https://www.khronos.org/opengl/wiki/GLSL_Object#Program_objects>
#[derive(Debug)]
pub struct Program {
    /// The internal OpenGL id for this object.
    id: GLuint,
    link_error: Option<ShaderError>,
}

impl Program {
    /// Link a vertex and a fragment shader into a new program.
    ///
    /// Both shaders are deleted afterwards, whether or not linking succeeded.
    /// A failed link is logged and kept on the program, which is still
    /// returned.
    pub fn link(gl: &impl GlApi, vert_shader: CompiledShader, frag_shader: CompiledShader) -> Self {
        let program = gl.create_program();
        gl.attach_shader(program, vert_shader.id());
        gl.attach_shader(program, frag_shader.id());
        gl.link_program(program);

        let success = gl.get_program_iv(program, gl::LINK_STATUS);
        let link_error = if success != GLint::from(gl::TRUE) {
            let log_length = gl.get_program_iv(program, gl::INFO_LOG_LENGTH);
            let log = read_info_log(log_length, |buf| gl.get_program_info_log(program, buf));
            let err = ShaderError::Link { log };
            log::error!("{err}");
            Some(err)
        } else {
            None
        };

        vert_shader.delete(gl);
        frag_shader.delete(gl);

        Self {
            id: program,
            link_error,
        }
    }
    /// Get the internal id of this program.
    pub fn id(&self) -> GLuint {
        self.id
    }
    /// The link diagnostic, if linking failed.
    pub fn link_error(&self) -> Option<&ShaderError> {
        self.link_error.as_ref()
    }
    /// Make this program part of the current rendering state.
    pub fn bind(&self, gl: &impl GlApi) {
        gl.use_program(self.id);
    }
}
