//! Application window and OpenGL context management.
//!
//! This module handles window creation, OpenGL context setup, and surface
//! resizing. It keeps platform/graphics concerns away from the viewer core.

use std::ffi::CString;
use std::num::NonZeroU32;
use std::sync::Arc;

use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ContextApi, ContextAttributesBuilder, GlProfile, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::DisplayBuilder;
use glow::HasContext;
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use crate::constants::*;
use crate::error::ViewerError;

/// Result of window and GL context creation.
pub struct WindowContext {
    pub window: Window,
    pub gl_surface: glutin::surface::Surface<WindowSurface>,
    pub gl_context: glutin::context::PossiblyCurrentContext,
    pub gl: Arc<glow::Context>,
}

/// Create a window with an OpenGL 3.3 core context made current on it.
pub fn create_window(event_loop: &ActiveEventLoop, title: &str) -> Result<WindowContext, ViewerError> {
    let window_attrs = WindowAttributes::default()
        .with_title(title)
        .with_inner_size(PhysicalSize::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT))
        .with_resizable(true);

    let template = ConfigTemplateBuilder::new().with_alpha_size(8);
    let display_builder = DisplayBuilder::new().with_window_attributes(Some(window_attrs));

    let (window, gl_config) = display_builder
        .build(event_loop, template, |configs| {
            // Prefer the config with the most MSAA samples
            configs
                .reduce(|accum, config| {
                    if config.num_samples() > accum.num_samples() {
                        config
                    } else {
                        accum
                    }
                })
                .expect("no OpenGL configs offered")
        })
        .map_err(|e| ViewerError::init("Failed to create window", e))?;

    let window = window.ok_or_else(|| ViewerError::Init("Failed to create window".into()))?;
    let window_handle = window
        .window_handle()
        .map_err(|e| ViewerError::init("Failed to get window handle", e))?;
    let gl_display = gl_config.display();

    let context_attrs = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
        .with_profile(GlProfile::Core)
        .build(Some(window_handle.as_raw()));

    let gl_context = unsafe {
        gl_display
            .create_context(&gl_config, &context_attrs)
            .map_err(|e| ViewerError::init("Failed to create OpenGL context", e))?
    };

    let size = window.inner_size();
    let (width, height) = match (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) {
        (Some(w), Some(h)) => (w, h),
        _ => return Err(ViewerError::Init("Window has zero size".into())),
    };
    let surface_attrs =
        SurfaceAttributesBuilder::<WindowSurface>::new().build(window_handle.as_raw(), width, height);

    let gl_surface = unsafe {
        gl_display
            .create_window_surface(&gl_config, &surface_attrs)
            .map_err(|e| ViewerError::init("Failed to create surface", e))?
    };

    let gl_context = gl_context
        .make_current(&gl_surface)
        .map_err(|e| ViewerError::init("Failed to make context current", e))?;

    if let Err(e) = gl_surface.set_swap_interval(&gl_context, SwapInterval::Wait(NonZeroU32::MIN)) {
        log::warn!("Could not enable vsync: {}", e);
    }

    let gl = Arc::new(unsafe {
        glow::Context::from_loader_function(|s| match CString::new(s) {
            Ok(s) => gl_display.get_proc_address(&s) as *const _,
            Err(_) => std::ptr::null(),
        })
    });

    unsafe {
        log::info!(
            "OpenGL {} on {}",
            gl.get_parameter_string(glow::VERSION),
            gl.get_parameter_string(glow::RENDERER)
        );
    }

    Ok(WindowContext {
        window,
        gl_surface,
        gl_context,
        gl,
    })
}

/// Resize the GL surface to match the window size.
pub fn resize_surface(
    gl_surface: &glutin::surface::Surface<WindowSurface>,
    gl_context: &glutin::context::PossiblyCurrentContext,
    width: u32,
    height: u32,
) {
    if let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
        gl_surface.resize(gl_context, w, h);
    }
}
