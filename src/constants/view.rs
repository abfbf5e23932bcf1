//! Pan/zoom constants.

/// Zoom level when an image is first shown (one image pixel per screen pixel)
pub const VIEW_DEFAULT_ZOOM: f32 = 1.0;
/// Minimum zoom level
pub const VIEW_MIN_ZOOM: f32 = 0.05;
/// Maximum zoom level
pub const VIEW_MAX_ZOOM: f32 = 20.0;
/// Exponential zoom rate per scroll unit
pub const VIEW_ZOOM_SENSITIVITY: f32 = 0.18;
/// Scroll magnitude synthesized by the keyboard zoom shortcuts
pub const VIEW_KEY_ZOOM_STEP: f32 = 0.36;
