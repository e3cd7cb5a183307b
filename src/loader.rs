//! Resolves OpenGL entry points for the current context.
use std::ffi::c_void;

use crate::{error::LoaderError, gl_wrappers::NativeGl};

/// Every GL function [`NativeGl`] calls, paired with its loaded check.
pub(crate) const REQUIRED_FUNCTIONS: &[(&str, fn() -> bool)] = &[
    ("glViewport", gl::Viewport::is_loaded),
    ("glCreateShader", gl::CreateShader::is_loaded),
    ("glShaderSource", gl::ShaderSource::is_loaded),
    ("glCompileShader", gl::CompileShader::is_loaded),
    ("glGetShaderiv", gl::GetShaderiv::is_loaded),
    ("glGetShaderInfoLog", gl::GetShaderInfoLog::is_loaded),
    ("glDeleteShader", gl::DeleteShader::is_loaded),
    ("glCreateProgram", gl::CreateProgram::is_loaded),
    ("glAttachShader", gl::AttachShader::is_loaded),
    ("glLinkProgram", gl::LinkProgram::is_loaded),
    ("glGetProgramiv", gl::GetProgramiv::is_loaded),
    ("glGetProgramInfoLog", gl::GetProgramInfoLog::is_loaded),
    ("glUseProgram", gl::UseProgram::is_loaded),
    ("glGenVertexArrays", gl::GenVertexArrays::is_loaded),
    ("glGenBuffers", gl::GenBuffers::is_loaded),
    ("glBindVertexArray", gl::BindVertexArray::is_loaded),
    ("glBindBuffer", gl::BindBuffer::is_loaded),
    ("glBufferData", gl::BufferData::is_loaded),
    ("glVertexAttribPointer", gl::VertexAttribPointer::is_loaded),
    ("glEnableVertexAttribArray", gl::EnableVertexAttribArray::is_loaded),
    ("glClearColor", gl::ClearColor::is_loaded),
    ("glClear", gl::Clear::is_loaded),
    ("glDrawArrays", gl::DrawArrays::is_loaded),
];

/// Load the GL function table through `resolver` and check that nothing this
/// program calls is missing.
///
/// The context the functions belong to must be current on this thread.
pub fn load_with<F>(resolver: F) -> Result<NativeGl, LoaderError>
where
    F: FnMut(&'static str) -> *const c_void,
{
    gl::load_with(resolver);

    if let Some((name, _)) = REQUIRED_FUNCTIONS.iter().find(|(_, is_loaded)| !is_loaded()) {
        return Err(LoaderError::MissingFunction(*name));
    }
    log::debug!("loaded {} OpenGL functions", REQUIRED_FUNCTIONS.len());

    // SAFETY: every required function was just checked.
    Ok(unsafe { NativeGl::assume_loaded() })
}
