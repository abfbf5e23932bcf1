//! Viewer constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

mod minimap;
mod spring;
mod view;
mod window;

pub use minimap::*;
pub use spring::*;
pub use view::*;
pub use window::*;
