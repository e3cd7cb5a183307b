//! Exports [`Shader`] and [`CompiledShader`].
use std::{ffi::CString, fmt};

use gl::types::{GLenum, GLint, GLuint};

use super::{read_info_log, GlApi};
use crate::error::ShaderError;

/// An uncompiled OpenGL shader.
/// Contains the source code necessary to compile it.
pub struct Shader {
    /// GL ID for this shader.
    inner: GLuint,
    shader_type: ShaderType,
    /// The source code for this shader.
    source: CString,
}

/// Represents the pipeline stage of a shader object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderType {
    /// This shader is a Vertex shader.
    Vertex,
    /// This shader is a Fragment shader.
    Fragment,
}

impl ShaderType {
    pub fn gl_enum(self) -> GLenum {
        match self {
            ShaderType::Vertex => gl::VERTEX_SHADER,
            ShaderType::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderType::Vertex => "Vertex",
            ShaderType::Fragment => "Fragment",
        })
    }
}

impl Shader {
    /// Create the GL shader object for `source`.
    pub fn new(gl: &impl GlApi, shader_type: ShaderType, source: impl Into<CString>) -> Self {
        Self {
            inner: gl.create_shader(shader_type.gl_enum()),
            shader_type,
            source: source.into(),
        }
    }
    /// Helper function for `Shader::new()` with vertex shaders.
    pub fn vertex(gl: &impl GlApi, source: impl Into<CString>) -> Self {
        Self::new(gl, ShaderType::Vertex, source)
    }
    /// Helper function for `Shader::new()` with fragment shaders.
    pub fn fragment(gl: &impl GlApi, source: impl Into<CString>) -> Self {
        Self::new(gl, ShaderType::Fragment, source)
    }

    /// Compile this shader.
    ///
    /// A failed compile is logged with the driver's info log and kept on the
    /// returned [`CompiledShader`]; the object is handed back either way so
    /// linking can still be attempted.
    pub fn compile(self, gl: &impl GlApi) -> CompiledShader {
        gl.shader_source(self.inner, &self.source);
        gl.compile_shader(self.inner);

        let success = gl.get_shader_iv(self.inner, gl::COMPILE_STATUS);
        let error = if success != GLint::from(gl::TRUE) {
            let log_length = gl.get_shader_iv(self.inner, gl::INFO_LOG_LENGTH);
            let log = read_info_log(log_length, |buf| gl.get_shader_info_log(self.inner, buf));
            let err = ShaderError::Compile {
                stage: self.shader_type,
                log,
            };
            log::error!("{err}");
            Some(err)
        } else {
            None
        };

        CompiledShader {
            id: self.inner,
            shader_type: self.shader_type,
            error,
        }
    }
}

/// A shader object that went through compilation.
/// This can be linked into a [`Program`](super::Program), which consumes it.
#[derive(Debug)]
pub struct CompiledShader {
    /// GL ID for this shader.
    id: GLuint,
    shader_type: ShaderType,
    error: Option<ShaderError>,
}

impl CompiledShader {
    /// Get the internal GL ID of this shader.
    pub fn id(&self) -> GLuint {
        self.id
    }
    pub fn shader_type(&self) -> ShaderType {
        self.shader_type
    }
    /// The compile diagnostic, if compilation failed.
    pub fn error(&self) -> Option<&ShaderError> {
        self.error.as_ref()
    }
    /// Delete the GL shader object.
    pub fn delete(self, gl: &impl GlApi) {
        gl.delete_shader(self.id);
    }
}
