//! A [`GlApi`] that records every call, for tests.
use std::{cell::RefCell, collections::HashMap, ffi::CStr, rc::Rc};

use gl::types::{GLbitfield, GLenum, GLint, GLsizei, GLuint};

use super::GlApi;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Viewport(GLint, GLint, GLsizei, GLsizei),
    CreateShader(GLenum),
    ShaderSource(GLuint, String),
    CompileShader(GLuint),
    GetShaderiv(GLuint, GLenum),
    GetShaderInfoLog(GLuint, usize),
    DeleteShader(GLuint),
    CreateProgram,
    AttachShader(GLuint, GLuint),
    LinkProgram(GLuint),
    GetProgramiv(GLuint, GLenum),
    GetProgramInfoLog(GLuint, usize),
    UseProgram(GLuint),
    GenVertexArray,
    GenBuffer,
    BindVertexArray(GLuint),
    BindBuffer(GLenum, GLuint),
    BufferData(GLenum, Vec<u8>, GLenum),
    VertexAttribPointer {
        index: GLuint,
        size: GLint,
        kind: GLenum,
        normalized: bool,
        stride: GLsizei,
        offset: usize,
    },
    EnableVertexAttribArray(GLuint),
    ClearColor(f32, f32, f32, f32),
    Clear(GLbitfield),
    DrawArrays(GLenum, GLint, GLsizei),
}

impl Call {
    pub fn name(&self) -> &'static str {
        match self {
            Call::Viewport(..) => "viewport",
            Call::CreateShader(_) => "create_shader",
            Call::ShaderSource(..) => "shader_source",
            Call::CompileShader(_) => "compile_shader",
            Call::GetShaderiv(..) => "get_shader_iv",
            Call::GetShaderInfoLog(..) => "get_shader_info_log",
            Call::DeleteShader(_) => "delete_shader",
            Call::CreateProgram => "create_program",
            Call::AttachShader(..) => "attach_shader",
            Call::LinkProgram(_) => "link_program",
            Call::GetProgramiv(..) => "get_program_iv",
            Call::GetProgramInfoLog(..) => "get_program_info_log",
            Call::UseProgram(_) => "use_program",
            Call::GenVertexArray => "gen_vertex_array",
            Call::GenBuffer => "gen_buffer",
            Call::BindVertexArray(_) => "bind_vertex_array",
            Call::BindBuffer(..) => "bind_buffer",
            Call::BufferData(..) => "buffer_data",
            Call::VertexAttribPointer { .. } => "vertex_attrib_pointer",
            Call::EnableVertexAttribArray(_) => "enable_vertex_attrib_array",
            Call::ClearColor(..) => "clear_color",
            Call::Clear(_) => "clear",
            Call::DrawArrays(..) => "draw_arrays",
        }
    }
}

#[derive(Default)]
struct State {
    calls: Vec<Call>,
    last_id: GLuint,
    shader_kinds: HashMap<GLuint, GLenum>,
    failing_stages: Vec<GLenum>,
    fail_link: bool,
    info_log: String,
}

/// Clones share one call log, so a clone captured by a callback records into
/// the same history as the original.
#[derive(Clone, Default)]
pub struct RecordingGl {
    state: Rc<RefCell<State>>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shaders of `kind` report a failed compile with `log` as the info log.
    pub fn fail_compile(self, kind: GLenum, log: &str) -> Self {
        {
            let mut state = self.state.borrow_mut();
            state.failing_stages.push(kind);
            state.info_log = log.to_owned();
        }
        self
    }

    /// Programs report a failed link with `log` as the info log.
    pub fn fail_link(self, log: &str) -> Self {
        {
            let mut state = self.state.borrow_mut();
            state.fail_link = true;
            state.info_log = log.to_owned();
        }
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn call_names(&self) -> Vec<&'static str> {
        self.state.borrow().calls.iter().map(Call::name).collect()
    }

    pub fn count(&self, name: &str) -> usize {
        self.state.borrow().calls.iter().filter(|call| call.name() == name).count()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }

    fn next_id(&self) -> GLuint {
        let mut state = self.state.borrow_mut();
        state.last_id += 1;
        state.last_id
    }

    fn info_log_length(&self) -> GLint {
        let len = self.state.borrow().info_log.len();
        if len == 0 {
            0
        } else {
            GLint::try_from(len + 1).unwrap()
        }
    }

    fn write_info_log(&self, buf: &mut [u8]) -> usize {
        let state = self.state.borrow();
        let log = state.info_log.as_bytes();
        if buf.is_empty() {
            return 0;
        }
        let written = log.len().min(buf.len() - 1);
        buf[..written].copy_from_slice(&log[..written]);
        buf[written] = 0;
        written
    }
}

impl GlApi for RecordingGl {
    fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        self.record(Call::Viewport(x, y, width, height));
    }

    fn create_shader(&self, kind: GLenum) -> GLuint {
        self.record(Call::CreateShader(kind));
        let id = self.next_id();
        self.state.borrow_mut().shader_kinds.insert(id, kind);
        id
    }

    fn shader_source(&self, shader: GLuint, source: &CStr) {
        self.record(Call::ShaderSource(shader, source.to_string_lossy().into_owned()));
    }

    fn compile_shader(&self, shader: GLuint) {
        self.record(Call::CompileShader(shader));
    }

    fn get_shader_iv(&self, shader: GLuint, pname: GLenum) -> GLint {
        self.record(Call::GetShaderiv(shader, pname));
        match pname {
            gl::COMPILE_STATUS => {
                let state = self.state.borrow();
                let failed = state
                    .shader_kinds
                    .get(&shader)
                    .is_some_and(|kind| state.failing_stages.contains(kind));
                if failed {
                    gl::FALSE.into()
                } else {
                    gl::TRUE.into()
                }
            }
            gl::INFO_LOG_LENGTH => self.info_log_length(),
            _ => 0,
        }
    }

    fn get_shader_info_log(&self, shader: GLuint, buf: &mut [u8]) -> usize {
        self.record(Call::GetShaderInfoLog(shader, buf.len()));
        self.write_info_log(buf)
    }

    fn delete_shader(&self, shader: GLuint) {
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> GLuint {
        self.record(Call::CreateProgram);
        self.next_id()
    }

    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        self.record(Call::AttachShader(program, shader));
    }

    fn link_program(&self, program: GLuint) {
        self.record(Call::LinkProgram(program));
    }

    fn get_program_iv(&self, program: GLuint, pname: GLenum) -> GLint {
        self.record(Call::GetProgramiv(program, pname));
        match pname {
            gl::LINK_STATUS if self.state.borrow().fail_link => gl::FALSE.into(),
            gl::LINK_STATUS => gl::TRUE.into(),
            gl::INFO_LOG_LENGTH => self.info_log_length(),
            _ => 0,
        }
    }

    fn get_program_info_log(&self, program: GLuint, buf: &mut [u8]) -> usize {
        self.record(Call::GetProgramInfoLog(program, buf.len()));
        self.write_info_log(buf)
    }

    fn use_program(&self, program: GLuint) {
        self.record(Call::UseProgram(program));
    }

    fn gen_vertex_array(&self) -> GLuint {
        self.record(Call::GenVertexArray);
        self.next_id()
    }

    fn gen_buffer(&self) -> GLuint {
        self.record(Call::GenBuffer);
        self.next_id()
    }

    fn bind_vertex_array(&self, vao: GLuint) {
        self.record(Call::BindVertexArray(vao));
    }

    fn bind_buffer(&self, target: GLenum, buffer: GLuint) {
        self.record(Call::BindBuffer(target, buffer));
    }

    fn buffer_data(&self, target: GLenum, data: &[u8], usage: GLenum) {
        self.record(Call::BufferData(target, data.to_vec(), usage));
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
        self.record(Call::VertexAttribPointer {
            index,
            size,
            kind,
            normalized,
            stride,
            offset,
        });
    }

    fn enable_vertex_attrib_array(&self, index: GLuint) {
        self.record(Call::EnableVertexAttribArray(index));
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.record(Call::ClearColor(red, green, blue, alpha));
    }

    fn clear(&self, mask: GLbitfield) {
        self.record(Call::Clear(mask));
    }

    fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLsizei) {
        self.record(Call::DrawArrays(mode, first, count));
    }
}
