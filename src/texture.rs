use crate::error::ViewerError;
use crate::image_loader::LoadedImage;
use crate::view::ImageExtent;
use glow::HasContext;
use std::sync::Arc;

/// GPU copy of the loaded image.
pub struct ImageTexture {
    gl: Arc<glow::Context>,
    pub texture: glow::Texture,
    pub extent: ImageExtent,
}

impl ImageTexture {
    /// Upload `image` with a full mip chain. The CPU-side pixels are dropped
    /// once the upload returns.
    pub fn upload(gl: Arc<glow::Context>, image: LoadedImage) -> Result<Self, ViewerError> {
        let extent = image.extent();

        let texture = unsafe {
            let tex = gl
                .create_texture()
                .map_err(|e| ViewerError::init("Failed to create texture", e))?;
            gl.bind_texture(glow::TEXTURE_2D, Some(tex));
            gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);

            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA8 as i32,
                extent.width as i32,
                extent.height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                Some(image.as_bytes()),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);

            // Smooth minification when zoomed far out
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR_MIPMAP_LINEAR as i32,
            );
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::CLAMP_TO_EDGE as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::CLAMP_TO_EDGE as i32);

            gl.bind_texture(glow::TEXTURE_2D, None);
            tex
        };
        drop(image);

        log::info!("Uploaded {}x{} texture", extent.width, extent.height);
        Ok(Self { gl, texture, extent })
    }

    /// Bind this texture to a texture unit
    pub fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.texture));
        }
    }
}

impl Drop for ImageTexture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.texture);
        }
    }
}
