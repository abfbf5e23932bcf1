//! Pan spring constants.

/// Spring stiffness (acceleration per pixel of displacement)
pub const SPRING_STIFFNESS: f32 = 250.0;
/// Spring damping (acceleration per pixel/second of velocity)
pub const SPRING_DAMPING: f32 = 25.0;
/// Displacement below which an axis may snap to its target (pixels)
pub const SPRING_SNAP_DISTANCE: f32 = 0.5;
/// Velocity below which an axis may snap to its target (pixels/second)
pub const SPRING_SNAP_VELOCITY: f32 = 0.5;
/// Largest time step fed to the spring, guards against frame hitches
pub const SPRING_MAX_DT: f32 = 0.05;
