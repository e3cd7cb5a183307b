//! Shader and geometry setup, and drawing a frame.
use std::ffi::CStr;

use crate::{
    geometry::Geometry,
    gl_wrappers::{GlApi, Program, Shader},
};

/// Background color the framebuffer is cleared to every frame.
pub const CLEAR_COLOR: [f32; 4] = [0.2, 0.3, 0.3, 1.0];

macro_rules! include_cstr {
    ( $path:literal $(,)? ) => {{
        // Use a constant to force the verification to run at compile time.
        const VALUE: &'static ::core::ffi::CStr = match ::core::ffi::CStr::from_bytes_with_nul(
            concat!(include_str!($path), "\0").as_bytes(),
        ) {
            Ok(value) => value,
            Err(_) => panic!(concat!("interior NUL byte(s) in `", $path, "`")),
        };
        VALUE
    }};
}

pub const VERT_SHADER_SOURCE: &CStr = include_cstr!("../glsl/vert_shader.glsl");
pub const FRAG_SHADER_SOURCE: &CStr = include_cstr!("../glsl/frag_shader.glsl");

/// Everything needed to draw the triangle.
pub struct Render {
    program: Program,
    geometry: Geometry,
}

impl Render {
    /// Compile and link the shaders, then upload the triangle.
    ///
    /// The context behind `gl` must be current. Shader or link failures are
    /// logged and do not stop setup.
    pub fn init(gl: &impl GlApi) -> Self {
        let vert_shader = Shader::vertex(gl, VERT_SHADER_SOURCE).compile(gl);
        let frag_shader = Shader::fragment(gl, FRAG_SHADER_SOURCE).compile(gl);
        let program = Program::link(gl, vert_shader, frag_shader);

        let geometry = Geometry::upload(gl);

        Render { program, geometry }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Clear the color buffer to [`CLEAR_COLOR`].
    pub fn clear(&self, gl: &impl GlApi) {
        let [red, green, blue, alpha] = CLEAR_COLOR;
        gl.clear_color(red, green, blue, alpha);
        gl.clear(gl::COLOR_BUFFER_BIT);
    }

    /// Clear, then draw the triangle with the linked program.
    pub fn render_frame(&self, gl: &impl GlApi) {
        self.clear(gl);
        self.program.bind(gl);
        self.geometry.bind(gl);
        gl.draw_arrays(gl::TRIANGLES, 0, self.geometry.vertex_count());
    }
}
