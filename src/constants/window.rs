//! Window and presentation constants.

/// Default window width
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
/// Default window height
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
/// Base window title
pub const WINDOW_TITLE: &str = "Image Viewer";
/// Background clear color
pub const CLEAR_COLOR: [f32; 4] = [0.12, 0.12, 0.12, 1.0];
/// Pixels per scroll line when a touchpad reports pixel deltas
pub const SCROLL_PIXELS_PER_LINE: f32 = 20.0;
