//! Window-system-independent input events.
//!
//! The application shell translates winit events into these and feeds them
//! to [`crate::session::ViewerSession::handle_event`]. Pointer positions are
//! raw window coordinates with Y growing downward.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
    Middle,
    Other,
}

/// Keys the viewer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Equal,
    Minus,
    NumpadAdd,
    NumpadSubtract,
    Other,
}

/// Modifier state at the time of a key press. Only Ctrl gates a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
}

/// Input delivered to the viewer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Drawable area changed size
    Resize { width: u32, height: u32 },
    ButtonPress { button: Button, pointer: Vec2 },
    /// Pointer moved, with or without a button held
    ButtonMove { pointer: Vec2 },
    ButtonRelease { button: Button, pointer: Vec2 },
    /// Scroll in lines; positive zooms in
    Scroll { delta: f32 },
    /// Key pressed or auto-repeated
    Key { key: Key, modifiers: Modifiers },
}
