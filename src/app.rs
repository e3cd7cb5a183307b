//! Program flow from window creation to the end of the render loop.
use crate::{
    error::AppError,
    gl_wrappers::{gl_upd_viewport, GlApi},
    render::Render,
    window::{AppWindow, Key, Platform, WindowConfig},
};

/// Open the window, set up GL state and render until the window closes.
///
/// Returns the number of frames drawn. Window or loader failures return
/// before any GL call is made.
pub fn run<P: Platform>(platform: &mut P, config: &WindowConfig) -> Result<u64, AppError> {
    let mut window = platform.create_window(config)?;
    let gl = platform.load_gl(&window)?;

    let (width, height) = window.framebuffer_size();
    gl_upd_viewport(&gl, width, height);
    let resize_gl = gl.clone();
    window.set_framebuffer_size_callback(Box::new(move |width, height| {
        framebuffer_size_callback(&resize_gl, width, height)
    }));

    let render = Render::init(&gl);
    if let Some(err) = render.program().link_error() {
        log::warn!("entering the render loop with an unlinked program ({err})");
    }
    Ok(render_loop(&mut window, &gl, &render))
}

/// Keep the viewport in sync with the framebuffer.
pub fn framebuffer_size_callback(gl: &impl GlApi, width: u32, height: u32) {
    log::info!("Resizing window to {width}x{height}.");
    gl_upd_viewport(gl, width, height);
}

/// Request the window to close when Escape is held.
pub fn process_input(window: &mut impl AppWindow) {
    if window.key_pressed(Key::Escape) {
        log::info!("Closing window since user hit ESC.");
        window.set_should_close(true);
    }
}

/// Draw frames until the close flag is seen at the top of an iteration.
pub fn render_loop(window: &mut impl AppWindow, gl: &impl GlApi, render: &Render) -> u64 {
    let mut frame_count = 0;
    while !window.should_close() {
        process_input(window);

        render.render_frame(gl);

        window.swap_buffers();
        window.poll_events();
        frame_count += 1;
    }
    log::debug!("render loop finished after {frame_count} frames");
    frame_count
}
