//! Bird's-eye minimap geometry.
//!
//! The minimap is a fixed-width box in the viewport's top-right corner that
//! shows the whole image letterboxed inside it, plus a quad marking the part
//! of the image visible in the main view.

use crate::constants::*;
use crate::view::{ImageExtent, ViewState, ViewportExtent};
use glam::Vec2;

/// Screen-space rectangle of the minimap (Y up).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimapLayout {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl MinimapLayout {
    pub fn compute(image: ImageExtent, viewport: ViewportExtent) -> Self {
        let width = MINIMAP_WIDTH;
        let height = (width as f32 * (image.height as f32 / image.width as f32)).round() as i32;
        Self {
            x: viewport.width as i32 - width - MINIMAP_MARGIN,
            y: viewport.height as i32 - height - MINIMAP_MARGIN,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Inclusive hit test in screen space.
    pub fn contains(&self, screen: Vec2) -> bool {
        let min = self.origin();
        let max = min + self.size();
        screen.x >= min.x && screen.x <= max.x && screen.y >= min.y && screen.y <= max.y
    }

    /// Image-to-minimap scale that fits the whole image in the box.
    pub fn zoom(&self, image: ImageExtent) -> f32 {
        let sx = self.width as f32 / image.width as f32;
        let sy = self.height as f32 / image.height as f32;
        sx.min(sy)
    }

    /// Offset that centers the letterboxed image inside the box.
    pub fn pan(&self, image: ImageExtent) -> Vec2 {
        (self.size() - image.size() * self.zoom(image)) * 0.5
    }

    /// Map a minimap-local point to image space, clamped to the image bounds.
    pub fn local_to_image(&self, image: ImageExtent, local: Vec2) -> Vec2 {
        let p = (local - self.pan(image)) / self.zoom(image);
        p.clamp(Vec2::ZERO, image.size())
    }

    pub fn screen_to_image(&self, image: ImageExtent, screen: Vec2) -> Vec2 {
        self.local_to_image(image, screen - self.origin())
    }

    /// Corners of the minimap box in screen space, counter-clockwise from the
    /// bottom-left.
    pub fn border(&self) -> [Vec2; 4] {
        let min = self.origin();
        let max = min + self.size();
        [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)]
    }

    /// Quad marking the main view's visible region, in minimap-local
    /// coordinates, counter-clockwise from the bottom-left.
    pub fn indicator(
        &self,
        image: ImageExtent,
        view: &ViewState,
        viewport: ViewportExtent,
    ) -> [Vec2; 4] {
        let (min, max) = visible_region(image, view, viewport);
        let zoom = self.zoom(image);
        let pan = self.pan(image);
        let lo = pan + min * zoom;
        let hi = pan + max * zoom;
        [lo, Vec2::new(hi.x, lo.y), hi, Vec2::new(lo.x, hi.y)]
    }
}

/// Image-space rectangle `(min, max)` visible in the main view, clamped to
/// the image bounds.
pub fn visible_region(image: ImageExtent, view: &ViewState, viewport: ViewportExtent) -> (Vec2, Vec2) {
    let size = viewport.size();
    let corners = [
        Vec2::ZERO,
        Vec2::new(size.x, 0.0),
        size,
        Vec2::new(0.0, size.y),
    ]
    .map(|c| view.screen_to_image(c));

    let mut min = corners[0];
    let mut max = corners[0];
    for c in &corners[1..] {
        min = min.min(*c);
        max = max.max(*c);
    }
    let bounds = image.size();
    (min.clamp(Vec2::ZERO, bounds), max.clamp(Vec2::ZERO, bounds))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).abs().max_element() < 1e-3
    }

    #[test]
    fn test_layout_follows_aspect_ratio() {
        let layout = MinimapLayout::compute(ImageExtent::new(1000, 500), ViewportExtent::new(1200, 800));
        assert_eq!(layout.width, 220);
        assert_eq!(layout.height, 110);
        assert_eq!(layout.x, 1200 - 220 - 12);
        assert_eq!(layout.y, 800 - 110 - 12);
    }

    #[test]
    fn test_layout_height_rounds() {
        // 220 * 3/7 = 94.28...
        let layout = MinimapLayout::compute(ImageExtent::new(700, 300), ViewportExtent::new(800, 600));
        assert_eq!(layout.height, 94);
    }

    #[test]
    fn test_center_click_maps_to_image_center() {
        let image = ImageExtent::new(1000, 500);
        let layout = MinimapLayout::compute(image, ViewportExtent::new(1200, 800));
        assert!(approx(layout.pan(image), Vec2::ZERO));
        assert!(approx(layout.local_to_image(image, Vec2::new(110.0, 55.0)), Vec2::new(500.0, 250.0)));
    }

    #[test]
    fn test_local_to_image_clamps_outside_points() {
        let image = ImageExtent::new(1000, 500);
        let layout = MinimapLayout::compute(image, ViewportExtent::new(1200, 800));
        assert_eq!(layout.local_to_image(image, Vec2::new(-50.0, 500.0)), Vec2::new(0.0, 500.0));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let layout = MinimapLayout { x: 10, y: 20, width: 100, height: 50 };
        assert!(layout.contains(Vec2::new(10.0, 20.0)));
        assert!(layout.contains(Vec2::new(110.0, 70.0)));
        assert!(!layout.contains(Vec2::new(110.5, 70.0)));
        assert!(!layout.contains(Vec2::new(50.0, 19.0)));
    }

    #[test]
    fn test_indicator_covers_whole_minimap_when_image_fits() {
        let image = ImageExtent::new(1000, 500);
        let viewport = ViewportExtent::new(1200, 800);
        let layout = MinimapLayout::compute(image, viewport);
        let view = ViewState::new(Vec2::new(100.0, 150.0), 1.0);
        let quad = layout.indicator(image, &view, viewport);
        assert!(approx(quad[0], Vec2::ZERO));
        assert!(approx(quad[2], Vec2::new(220.0, 110.0)));
    }

    #[test]
    fn test_indicator_tracks_visible_region() {
        let image = ImageExtent::new(1000, 500);
        let viewport = ViewportExtent::new(500, 250);
        let layout = MinimapLayout::compute(image, viewport);
        // Zoom 2 with pan (-500, -250) shows image [250, 500] × [125, 250]
        let view = ViewState::new(Vec2::new(-500.0, -250.0), 2.0);
        let (min, max) = visible_region(image, &view, viewport);
        assert!(approx(min, Vec2::new(250.0, 125.0)));
        assert!(approx(max, Vec2::new(500.0, 250.0)));

        let quad = layout.indicator(image, &view, viewport);
        assert!(approx(quad[0], Vec2::new(55.0, 27.5)));
        assert!(approx(quad[2], Vec2::new(110.0, 55.0)));
    }

    #[test]
    fn test_letterboxed_pan() {
        // Height rounds up to 32, so the x-scale (0.22) wins and y is letterboxed
        let image = ImageExtent::new(1000, 145);
        let layout = MinimapLayout::compute(image, ViewportExtent::new(800, 600));
        assert_eq!(layout.height, 32);
        let zoom = layout.zoom(image);
        assert!((zoom - 0.22).abs() < 1e-6);
        let pan = layout.pan(image);
        assert!(pan.x.abs() < 1e-4);
        assert!((pan.y - (32.0 - 145.0 * 0.22) * 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_border_corners() {
        let layout = MinimapLayout { x: 10, y: 20, width: 100, height: 50 };
        let b = layout.border();
        assert_eq!(b[0], Vec2::new(10.0, 20.0));
        assert_eq!(b[2], Vec2::new(110.0, 70.0));
    }
}
