//! View state and the screen ↔ image coordinate transform.
//!
//! Screen space has its origin at the bottom-left of the window with Y growing
//! upward, matching the GL projection. Raw pointer positions (Y growing
//! downward) are converted with [`pointer_to_screen`] before any math here.

use crate::constants::*;
use glam::{Mat4, Vec2};

/// Size of the loaded image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageExtent {
    pub width: u32,
    pub height: u32,
}

impl ImageExtent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Size of the window's drawable area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportExtent {
    pub width: u32,
    pub height: u32,
}

impl ViewportExtent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Orthographic projection mapping screen pixels to clip space.
    pub fn projection(&self) -> Mat4 {
        projection(self.width as f32, self.height as f32)
    }
}

/// Orthographic projection for a `width × height` pixel area with origin at
/// the bottom-left.
pub fn projection(width: f32, height: f32) -> Mat4 {
    Mat4::orthographic_rh(0.0, width, 0.0, height, -1.0, 1.0)
}

/// Convert a raw pointer position (Y down) into screen space (Y up).
pub fn pointer_to_screen(pointer: Vec2, viewport: ViewportExtent) -> Vec2 {
    Vec2::new(pointer.x, viewport.height as f32 - pointer.y)
}

/// Pan and zoom of the main view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Displayed pan, animated by the spring
    pub pan: Vec2,
    /// Pan the spring is pulling toward; always inside the clamp policy
    pub target_pan: Vec2,
    pub pan_velocity: Vec2,
    /// Image pixels to screen pixels
    pub zoom: f32,
}

impl ViewState {
    pub fn new(pan: Vec2, zoom: f32) -> Self {
        Self {
            pan,
            target_pan: pan,
            pan_velocity: Vec2::ZERO,
            zoom: zoom.clamp(VIEW_MIN_ZOOM, VIEW_MAX_ZOOM),
        }
    }

    pub fn screen_to_image(&self, screen: Vec2) -> Vec2 {
        (screen - self.pan) / self.zoom
    }

    pub fn image_to_screen(&self, image: Vec2) -> Vec2 {
        image * self.zoom + self.pan
    }

    /// Stop any in-flight spring motion.
    pub fn halt(&mut self) {
        self.pan_velocity = Vec2::ZERO;
    }
}

/// Pan that places `image_point` at the center of the viewport at `zoom`.
pub fn center_pan_for(image_point: Vec2, zoom: f32, viewport: ViewportExtent) -> Vec2 {
    viewport.center() - image_point * zoom
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).abs().max_element() < 1e-3
    }

    #[test]
    fn test_screen_to_image_inverts_image_to_screen() {
        let view = ViewState::new(Vec2::new(-130.0, 42.5), 3.25);
        let p = Vec2::new(321.0, 77.0);
        assert!(approx(view.screen_to_image(view.image_to_screen(p)), p));
    }

    #[test]
    fn test_center_pan_round_trip() {
        let viewport = ViewportExtent::new(1200, 800);
        let point = Vec2::new(431.0, 219.5);
        for zoom in [VIEW_MIN_ZOOM, 0.5, 1.0, 7.3, VIEW_MAX_ZOOM] {
            let view = ViewState::new(center_pan_for(point, zoom, viewport), zoom);
            assert!(approx(view.screen_to_image(viewport.center()), point));
        }
    }

    #[test]
    fn test_pointer_to_screen_flips_y() {
        let viewport = ViewportExtent::new(1200, 800);
        let s = pointer_to_screen(Vec2::new(10.0, 30.0), viewport);
        assert_eq!(s, Vec2::new(10.0, 770.0));
    }

    #[test]
    fn test_image_to_screen_applies_zoom_then_pan() {
        let view = ViewState::new(Vec2::new(-400.0, -400.0), 2.0);
        assert_eq!(view.image_to_screen(Vec2::new(500.0, 400.0)), Vec2::new(600.0, 400.0));
    }

    #[test]
    fn test_zoom_is_clamped_on_construction() {
        assert_eq!(ViewState::new(Vec2::ZERO, 100.0).zoom, VIEW_MAX_ZOOM);
        assert_eq!(ViewState::new(Vec2::ZERO, 0.0).zoom, VIEW_MIN_ZOOM);
    }

    #[test]
    fn test_projection_maps_corners_to_clip_space() {
        let proj = ViewportExtent::new(200, 100).projection();
        let bl = proj.project_point3(glam::Vec3::new(0.0, 0.0, 0.0));
        let tr = proj.project_point3(glam::Vec3::new(200.0, 100.0, 0.0));
        assert!((bl.x + 1.0).abs() < 1e-5 && (bl.y + 1.0).abs() < 1e-5);
        assert!((tr.x - 1.0).abs() < 1e-5 && (tr.y - 1.0).abs() < 1e-5);
    }
}
