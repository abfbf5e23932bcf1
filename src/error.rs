//! Fatal viewer errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    /// The image file is missing, unreadable, or not a decodable image
    #[error("failed to load image {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image {} has no pixels", .path.display())]
    EmptyImage { path: PathBuf },

    /// Window, GL config, context, or surface creation failed
    #[error("failed to initialize window: {0}")]
    Init(String),

    /// Shader compilation or program linking failed
    #[error("{stage} failed: {log}")]
    Compile { stage: &'static str, log: String },

    #[error("failed to start profiler server: {0}")]
    Profiler(String),
}

impl ViewerError {
    pub fn init(context: &str, err: impl std::fmt::Display) -> Self {
        Self::Init(format!("{}: {}", context, err))
    }
}
