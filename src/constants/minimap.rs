//! Minimap (bird's-eye view) constants.

/// Fixed minimap width in screen pixels; height follows the image aspect ratio
pub const MINIMAP_WIDTH: i32 = 220;
/// Inset from the viewport's top-right corner on both axes
pub const MINIMAP_MARGIN: i32 = 12;
/// Fill color of the visible-region indicator
pub const MINIMAP_INDICATOR_COLOR: [f32; 4] = [0.5, 0.5, 1.0, 0.75];
/// Outline color of the minimap border
pub const MINIMAP_BORDER_COLOR: [f32; 4] = [0.12, 0.12, 0.12, 0.80];
