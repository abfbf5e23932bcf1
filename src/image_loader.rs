//! Image decoding.
//!
//! Produces an owned RGBA8 buffer with rows ordered bottom-up, so image-space
//! Y grows upward like screen space and GL texture coordinates.

use crate::error::ViewerError;
use crate::view::ImageExtent;
use image::RgbaImage;
use std::path::Path;

/// Decoded pixels. Dropping it releases the buffer.
pub struct LoadedImage {
    pixels: RgbaImage,
}

impl LoadedImage {
    pub fn extent(&self) -> ImageExtent {
        let (width, height) = self.pixels.dimensions();
        ImageExtent::new(width, height)
    }

    /// Tightly packed RGBA rows, bottom row first.
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_raw()
    }
}

pub fn load_image(path: &Path) -> Result<LoadedImage, ViewerError> {
    let mut pixels = image::open(path)
        .map_err(|source| ViewerError::Load {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgba8();

    if pixels.width() == 0 || pixels.height() == 0 {
        return Err(ViewerError::EmptyImage {
            path: path.to_path_buf(),
        });
    }

    image::imageops::flip_vertical_in_place(&mut pixels);
    Ok(LoadedImage { pixels })
}
