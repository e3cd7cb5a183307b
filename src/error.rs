//! Error types for every stage of the program.
use thiserror::Error;

use crate::gl_wrappers::shader::ShaderType;

/// Failures of the windowing adapter. All of them are fatal.
#[derive(Debug, Error)]
pub enum WindowError {
    /// SDL or its video subsystem could not be initialized.
    #[error("failed to initialize SDL: {0}")]
    Init(String),
    /// The window system refused to create the window.
    #[error("failed to create window: {0}")]
    Create(String),
    /// The OpenGL context could not be created or made current.
    #[error("failed to set up the OpenGL context: {0}")]
    Context(String),
    /// The SDL event pump is unavailable.
    #[error("failed to acquire the event pump: {0}")]
    EventPump(String),
}

/// Failure to resolve the OpenGL function table.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to load OpenGL function `{0}`")]
    MissingFunction(&'static str),
}

/// Shader and program diagnostics.
///
/// These are logged and kept on the object that produced them; they never
/// stop the program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShaderError {
    #[error("{stage} shader compile error: {log}")]
    Compile { stage: ShaderType, log: String },
    #[error("Shader program linking error: {log}")]
    Link { log: String },
}

/// Fatal errors surfaced by [`crate::app::run`].
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Window(#[from] WindowError),
    #[error(transparent)]
    Loader(#[from] LoaderError),
}
