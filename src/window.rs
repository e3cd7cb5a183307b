//! Windowing adapter.
//!
//! [`AppWindow`] and [`Platform`] describe what the render loop needs from a
//! window system. [`SdlPlatform`] and [`SdlWindow`] provide it with SDL2.
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Scancode,
    video::{self, GLContext},
    EventPump, Sdl, VideoSubsystem,
};

use crate::{
    error::{LoaderError, WindowError},
    gl_wrappers::{GlApi, NativeGl},
    loader,
};

/// Window and context settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Requested OpenGL (major, minor) version, core profile.
    pub gl_version: (u8, u8),
    /// Required for core profiles on macOS.
    pub forward_compatible: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hello Triangle".to_string(),
            width: 800,
            height: 600,
            gl_version: (4, 1),
            forward_compatible: cfg!(target_os = "macos"),
        }
    }
}

/// Keys the program queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
}

/// Handler for framebuffer size changes, called with the new width and height.
pub type ResizeCallback = Box<dyn FnMut(u32, u32)>;

/// A window with a current GL context.
pub trait AppWindow {
    fn should_close(&self) -> bool;
    fn set_should_close(&mut self, value: bool);
    fn key_pressed(&self, key: Key) -> bool;
    /// Current framebuffer size in pixels.
    fn framebuffer_size(&self) -> (u32, u32);
    /// Register the resize handler, replacing any previous one.
    ///
    /// It is only ever invoked from inside [`AppWindow::poll_events`].
    fn set_framebuffer_size_callback(&mut self, callback: ResizeCallback);
    fn swap_buffers(&mut self);
    fn poll_events(&mut self);
}

/// Creates windows and loads GL for them.
pub trait Platform {
    type Window: AppWindow;
    type Gl: GlApi + Clone + 'static;

    /// Create a window and make its context current on this thread.
    fn create_window(&mut self, config: &WindowConfig) -> Result<Self::Window, WindowError>;
    /// Resolve GL functions for `window`'s context.
    fn load_gl(&mut self, window: &Self::Window) -> Result<Self::Gl, LoaderError>;
}

/// SDL2 with its video subsystem initialized.
///
/// Dropping this shuts SDL down.
pub struct SdlPlatform {
    sdl: Sdl,
    video: VideoSubsystem,
}

impl SdlPlatform {
    pub fn init() -> Result<Self, WindowError> {
        let sdl = sdl2::init().map_err(WindowError::Init)?;
        let video = sdl.video().map_err(WindowError::Init)?;
        log::debug!("SDL video driver: {}", video.current_video_driver());
        Ok(Self { sdl, video })
    }
}

impl Platform for SdlPlatform {
    type Window = SdlWindow;
    type Gl = NativeGl;

    fn create_window(&mut self, config: &WindowConfig) -> Result<SdlWindow, WindowError> {
        let gl_attr = self.video.gl_attr();
        let (major, minor) = config.gl_version;
        gl_attr.set_context_major_version(major);
        gl_attr.set_context_minor_version(minor);
        gl_attr.set_context_profile(video::GLProfile::Core);
        if config.forward_compatible {
            gl_attr.set_context_flags().forward_compatible().set();
        }

        let window = self
            .video
            .window(&config.title, config.width, config.height)
            .position_centered()
            .resizable()
            .opengl()
            .build()
            .map_err(|err| WindowError::Create(err.to_string()))?;

        let gl_ctx = window.gl_create_context().map_err(WindowError::Context)?;
        window.gl_make_current(&gl_ctx).map_err(WindowError::Context)?;

        let event_pump = self.sdl.event_pump().map_err(WindowError::EventPump)?;

        Ok(SdlWindow {
            gl_ctx,
            window,
            event_pump,
            should_close: false,
            on_resize: None,
        })
    }

    fn load_gl(&mut self, window: &SdlWindow) -> Result<NativeGl, LoaderError> {
        debug_assert!(
            window.is_context_current(),
            "the window's context must be current before loading GL"
        );
        loader::load_with(|name| self.video.gl_get_proc_address(name).cast())
    }
}

impl Drop for SdlPlatform {
    fn drop(&mut self) {
        log::debug!("shutting down SDL");
    }
}

/// An SDL window together with its GL context and event pump.
pub struct SdlWindow {
    gl_ctx: GLContext,
    window: video::Window,
    event_pump: EventPump,
    should_close: bool,
    on_resize: Option<ResizeCallback>,
}

impl SdlWindow {
    pub fn is_context_current(&self) -> bool {
        self.gl_ctx.is_current()
    }
}

impl AppWindow for SdlWindow {
    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, value: bool) {
        self.should_close = value;
    }

    fn key_pressed(&self, key: Key) -> bool {
        let scancode = match key {
            Key::Escape => Scancode::Escape,
        };
        self.event_pump.keyboard_state().is_scancode_pressed(scancode)
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }

    fn set_framebuffer_size_callback(&mut self, callback: ResizeCallback) {
        self.on_resize = Some(callback);
    }

    fn swap_buffers(&mut self) {
        self.window.gl_swap_window();
    }

    fn poll_events(&mut self) {
        let main_id = self.window.id();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => self.should_close = true,
                Event::Window {
                    window_id,
                    win_event,
                    ..
                } if window_id == main_id => match win_event {
                    WindowEvent::Close => self.should_close = true,
                    WindowEvent::SizeChanged(..) => {
                        if let Some(on_resize) = self.on_resize.as_mut() {
                            let (width, height) = self.window.drawable_size();
                            on_resize(width, height);
                        }
                    }
                    _ => {}
                },
                _ => {}
            }
        }
    }
}
