//! Pan clamp policy.
//!
//! An image larger than the viewport on an axis must cover it edge to edge;
//! a smaller one is centered with no free pan.

use crate::view::{ImageExtent, ViewportExtent};
use glam::Vec2;

/// Legal pan range `(min, max)` on one axis. Collapses to a single point when
/// the image fits.
pub fn pan_range(image_len: f32, viewport_len: f32, zoom: f32) -> (f32, f32) {
    let displayed = image_len * zoom;
    if displayed > viewport_len {
        (viewport_len - displayed, 0.0)
    } else {
        let centered = (viewport_len - displayed) * 0.5;
        (centered, centered)
    }
}

/// Whether the image, scaled by `zoom`, fits inside the viewport on one axis.
pub fn fits(image_len: f32, viewport_len: f32, zoom: f32) -> bool {
    image_len * zoom <= viewport_len
}

/// Centered pan on one axis.
pub fn centered(image_len: f32, viewport_len: f32, zoom: f32) -> f32 {
    (viewport_len - image_len * zoom) * 0.5
}

pub fn clamp_pan(pan: Vec2, zoom: f32, image: ImageExtent, viewport: ViewportExtent) -> Vec2 {
    let (min_x, max_x) = pan_range(image.width as f32, viewport.width as f32, zoom);
    let (min_y, max_y) = pan_range(image.height as f32, viewport.height as f32, zoom);
    Vec2::new(pan.x.clamp(min_x, max_x), pan.y.clamp(min_y, max_y))
}

/// Recenter each axis on which the image fits, leaving the others untouched.
pub fn center_fitting_axes(
    pan: Vec2,
    zoom: f32,
    image: ImageExtent,
    viewport: ViewportExtent,
) -> Vec2 {
    let mut out = pan;
    let (iw, ih) = (image.width as f32, image.height as f32);
    let (vw, vh) = (viewport.width as f32, viewport.height as f32);
    if fits(iw, vw, zoom) {
        out.x = centered(iw, vw, zoom);
    }
    if fits(ih, vh, zoom) {
        out.y = centered(ih, vh, zoom);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    const IMAGE: ImageExtent = ImageExtent { width: 1000, height: 800 };
    const VIEWPORT: ViewportExtent = ViewportExtent { width: 1200, height: 800 };

    fn in_policy(pan: Vec2, zoom: f32) -> bool {
        let (min_x, max_x) = pan_range(1000.0, 1200.0, zoom);
        let (min_y, max_y) = pan_range(800.0, 800.0, zoom);
        pan.x >= min_x && pan.x <= max_x && pan.y >= min_y && pan.y <= max_y
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let pans = [
            Vec2::new(0.0, 0.0),
            Vec2::new(5000.0, -5000.0),
            Vec2::new(-123.4, 56.7),
            Vec2::new(-1e6, 1e6),
        ];
        for zoom in [VIEW_MIN_ZOOM, 0.3, 1.0, 1.2, 2.0, 9.9, VIEW_MAX_ZOOM] {
            for p in pans {
                let once = clamp_pan(p, zoom, IMAGE, VIEWPORT);
                assert_eq!(clamp_pan(once, zoom, IMAGE, VIEWPORT), once);
                assert!(in_policy(once, zoom));
            }
        }
    }

    #[test]
    fn test_small_image_is_centered_regardless_of_input() {
        let zoom = 0.5;
        for p in [Vec2::new(-900.0, 900.0), Vec2::new(3.0, 4.0)] {
            let c = clamp_pan(p, zoom, IMAGE, VIEWPORT);
            assert_eq!(c, Vec2::new(350.0, 200.0));
        }
    }

    #[test]
    fn test_exact_fit_is_centered() {
        // Height 800 at zoom 1.0 exactly matches the viewport
        let c = clamp_pan(Vec2::new(0.0, 37.0), 1.0, IMAGE, VIEWPORT);
        assert_eq!(c.y, 0.0);
    }

    #[test]
    fn test_large_image_covers_viewport() {
        let zoom = 2.0;
        // Displayed 2000×1600: x in [-800, 0], y in [-800, 0]
        assert_eq!(clamp_pan(Vec2::new(50.0, 50.0), zoom, IMAGE, VIEWPORT), Vec2::ZERO);
        assert_eq!(
            clamp_pan(Vec2::new(-900.0, -1000.0), zoom, IMAGE, VIEWPORT),
            Vec2::new(-800.0, -800.0)
        );
        assert_eq!(
            clamp_pan(Vec2::new(-400.0, -400.0), zoom, IMAGE, VIEWPORT),
            Vec2::new(-400.0, -400.0)
        );
    }

    #[test]
    fn test_center_fitting_axes_only_touches_fitting_axis() {
        // At 1.1 the width fits (1100 <= 1200) but the height does not
        let p = center_fitting_axes(Vec2::new(-7.0, -7.0), 1.1, IMAGE, VIEWPORT);
        assert!((p.x - 50.0).abs() < 1e-3);
        assert_eq!(p.y, -7.0);
    }
}
