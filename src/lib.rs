//! A window with one orange triangle, drawn with OpenGL through SDL2.
//!
//! [`app::run`] drives the whole program: window and context creation,
//! function loading, shader and geometry setup, then the render loop.

pub mod app;
pub mod error;
pub mod geometry;
pub mod gl_wrappers;
pub mod loader;
pub mod logging;
pub mod render;
pub mod window;
