mod app;
mod clamp;
mod constants;
mod error;
mod events;
mod image_loader;
mod input;
mod minimap;
mod renderer;
mod session;
mod spring;
mod texture;
mod view;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use glam::Vec2;
use glutin::prelude::*;
use glutin::surface::WindowSurface;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};
use winit::window::{Window, WindowId};

use constants::*;
use error::ViewerError;
use events::{Button, Event, Key, Modifiers};
use image_loader::LoadedImage;
use renderer::Renderer;
use session::ViewerSession;
use texture::ImageTexture;
use view::{ImageExtent, ViewportExtent};

/// Pan and zoom around a single image with a bird's-eye minimap.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Image file to open
    path: PathBuf,

    /// Serve puffin profiling data while running
    #[arg(long)]
    profile: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            use clap::error::ErrorKind;
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
    {
        eprintln!("Failed to initialize logger: {}", e);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), ViewerError> {
    let image = image_loader::load_image(&cli.path)?;
    let extent = image.extent();
    log::info!("Loaded {} ({}x{})", cli.path.display(), extent.width, extent.height);

    let _profiler = if cli.profile {
        match start_profiler() {
            Ok(server) => Some(server),
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        }
    } else {
        None
    };

    let file_name = cli
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.path.display().to_string());
    let title = format!("{} - {} ({}x{})", WINDOW_TITLE, file_name, extent.width, extent.height);

    let event_loop = EventLoop::new().map_err(|e| ViewerError::init("Failed to create event loop", e))?;
    let mut app = App::new(image, title);
    event_loop
        .run_app(&mut app)
        .map_err(|e| ViewerError::init("Event loop failed", e))?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn start_profiler() -> Result<puffin_http::Server, ViewerError> {
    let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    let server = puffin_http::Server::new(&addr).map_err(|e| ViewerError::Profiler(e.to_string()))?;
    puffin::set_scopes_on(true);
    log::info!("Serving profiler data on {}", addr);
    Ok(server)
}

struct App {
    /// Decoded image waiting for the GL context; consumed on first resume
    pending_image: Option<LoadedImage>,
    title: String,
    state: Option<AppState>,
    error: Option<ViewerError>,
}

struct AppState {
    // Rendering; declared first so GL objects drop while the context is alive
    renderer: Renderer,
    texture: ImageTexture,

    // Window and GL
    window: Window,
    gl_surface: glutin::surface::Surface<WindowSurface>,
    gl_context: glutin::context::PossiblyCurrentContext,

    session: ViewerSession,
    modifiers: ModifiersState,
    last_cursor: Vec2,
    last_frame_time: Instant,
}

impl App {
    fn new(image: LoadedImage, title: String) -> Self {
        Self {
            pending_image: Some(image),
            title,
            state: None,
            error: None,
        }
    }

    fn init_state(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ViewerError> {
        let Some(image) = self.pending_image.take() else {
            return Ok(());
        };

        let app::WindowContext {
            window,
            gl_surface,
            gl_context,
            gl,
        } = app::create_window(event_loop, &self.title)?;
        log::info!("Window created");

        let image_extent: ImageExtent = image.extent();
        let texture = ImageTexture::upload(gl.clone(), image)?;
        let renderer = Renderer::new(gl, &texture)?;

        let size = window.inner_size();
        let session = ViewerSession::new(image_extent, ViewportExtent::new(size.width, size.height));
        window.request_redraw();

        self.state = Some(AppState {
            renderer,
            texture,
            window,
            gl_surface,
            gl_context,
            session,
            modifiers: ModifiersState::empty(),
            last_cursor: Vec2::ZERO,
            last_frame_time: Instant::now(),
        });
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        if let Err(e) = self.init_state(event_loop) {
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        if matches!(
            event,
            WindowEvent::Resized(_)
                | WindowEvent::KeyboardInput { .. }
                | WindowEvent::CursorMoved { .. }
                | WindowEvent::MouseInput { .. }
                | WindowEvent::MouseWheel { .. }
        ) {
            state.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                app::resize_surface(&state.gl_surface, &state.gl_context, size.width, size.height);
                // Minimized windows report zero; keep the last usable layout
                if size.width > 0 && size.height > 0 {
                    state.session.handle_event(Event::Resize {
                        width: size.width,
                        height: size.height,
                    });
                }
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                state.modifiers = modifiers.state();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if let PhysicalKey::Code(code) = event.physical_key {
                    if code == KeyCode::Escape {
                        event_loop.exit();
                        return;
                    }
                    state.session.handle_event(Event::Key {
                        key: map_key(code),
                        modifiers: Modifiers {
                            ctrl: state.modifiers.control_key(),
                        },
                    });
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                state.last_cursor = Vec2::new(position.x as f32, position.y as f32);
                state.session.handle_event(Event::ButtonMove {
                    pointer: state.last_cursor,
                });
            }
            WindowEvent::MouseInput { state: btn_state, button, .. } => {
                let button = map_button(button);
                let pointer = state.last_cursor;
                let event = match btn_state {
                    ElementState::Pressed => Event::ButtonPress { button, pointer },
                    ElementState::Released => Event::ButtonRelease { button, pointer },
                };
                state.session.handle_event(event);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / SCROLL_PIXELS_PER_LINE,
                };
                state.session.handle_event(Event::Scroll { delta });
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = state.update_and_render() {
                    self.error = Some(e);
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Idle once the view is at rest; input events request their own redraw
        if let Some(state) = &self.state {
            if state.session.is_animating() {
                state.window.request_redraw();
            }
        }
    }
}

impl AppState {
    fn update_and_render(&mut self) -> Result<(), ViewerError> {
        puffin::GlobalProfiler::lock().new_frame();
        puffin::profile_function!();

        let now = Instant::now();
        let dt = (now - self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        self.session.advance(dt);
        let frame = self.session.frame();
        self.renderer.render(&frame, &self.texture);

        self.window.pre_present_notify();
        self.gl_surface
            .swap_buffers(&self.gl_context)
            .map_err(|e| ViewerError::init("Failed to swap buffers", e))
    }
}

fn map_button(button: MouseButton) -> Button {
    match button {
        MouseButton::Left => Button::Left,
        MouseButton::Right => Button::Right,
        MouseButton::Middle => Button::Middle,
        _ => Button::Other,
    }
}

fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Equal => Key::Equal,
        KeyCode::Minus => Key::Minus,
        KeyCode::NumpadAdd => Key::NumpadAdd,
        KeyCode::NumpadSubtract => Key::NumpadSubtract,
        _ => Key::Other,
    }
}
