//! Input state machine.
//!
//! Decides whether a left-button drag moves the main view or scrubs the
//! minimap, and turns scroll and keyboard shortcuts into zoom about the
//! pointer.

use crate::clamp;
use crate::constants::*;
use crate::events::{Button, Event, Key};
use crate::minimap::MinimapLayout;
use crate::session::ViewerSession;
use crate::view::{self, ImageExtent, ViewState, ViewportExtent};
use glam::Vec2;

/// Which surface the current left-button drag applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    #[default]
    None,
    DraggingMain,
    DraggingMinimap,
}

/// Pointer tracking between events
///
/// Positions are kept as raw window coordinates (Y down) and flipped with the
/// current viewport on use, so a resize never leaves them stale.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub drag: DragMode,
    /// Latest raw pointer position
    pub pointer: Vec2,
    /// Raw pointer position at the last applied main-view drag step
    pub last_drag: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging_main(&self) -> bool {
        self.drag == DragMode::DraggingMain
    }

    /// Latest pointer position in screen space (Y up) for `viewport`
    pub fn screen_pointer(&self, viewport: ViewportExtent) -> Vec2 {
        view::pointer_to_screen(self.pointer, viewport)
    }
}

/// Route one event through the state machine.
pub fn handle_event(session: &mut ViewerSession, event: Event) {
    match event {
        Event::Resize { width, height } => {
            session.resize(ViewportExtent::new(width, height));
        }
        Event::ButtonPress { button: Button::Left, pointer } => {
            press(session, pointer);
        }
        Event::ButtonMove { pointer } => {
            pointer_moved(session, pointer);
        }
        Event::ButtonRelease { button: Button::Left, pointer } => {
            session.input.pointer = pointer;
            release(session);
        }
        Event::ButtonPress { .. } | Event::ButtonRelease { .. } => {}
        Event::Scroll { delta } => {
            let pointer = session.input.screen_pointer(session.viewport);
            zoom_at(&mut session.view, pointer, delta, session.image, session.viewport);
        }
        Event::Key { key, modifiers } => {
            if let Some(delta) = key_zoom_delta(key, modifiers.ctrl) {
                let pointer = session.input.screen_pointer(session.viewport);
                zoom_at(&mut session.view, pointer, delta, session.image, session.viewport);
            }
        }
    }
}

fn press(session: &mut ViewerSession, pointer: Vec2) {
    session.input.pointer = pointer;
    session.input.last_drag = pointer;
    let screen = session.input.screen_pointer(session.viewport);

    if session.minimap.contains(screen) {
        session.input.drag = DragMode::DraggingMinimap;
        center_from_minimap(&mut session.view, &session.minimap, screen, session.image, session.viewport);
    } else {
        session.input.drag = DragMode::DraggingMain;
        session.view.halt();
    }
    log::debug!("Drag started: {:?}", session.input.drag);
}

fn pointer_moved(session: &mut ViewerSession, pointer: Vec2) {
    session.input.pointer = pointer;
    match session.input.drag {
        DragMode::DraggingMain => {
            // Raw Y grows downward, screen Y upward
            let raw = pointer - session.input.last_drag;
            drag_main(&mut session.view, Vec2::new(raw.x, -raw.y));
            session.input.last_drag = pointer;
        }
        DragMode::DraggingMinimap => {
            let screen = session.input.screen_pointer(session.viewport);
            center_from_minimap(&mut session.view, &session.minimap, screen, session.image, session.viewport);
        }
        DragMode::None => {
            session.input.last_drag = pointer;
        }
    }
}

fn release(session: &mut ViewerSession) {
    let previous = std::mem::take(&mut session.input.drag);
    if previous == DragMode::DraggingMain {
        let view = &mut session.view;
        view.target_pan = clamp::clamp_pan(view.pan, view.zoom, session.image, session.viewport);
    }
    log::debug!("Drag ended: {:?}", previous);
}

/// Move the displayed pan directly with the pointer. The target is left
/// alone so the clamp can be applied once on release.
pub fn drag_main(view: &mut ViewState, delta: Vec2) {
    view.pan += delta;
}

/// Center the main view on the image point under `screen` in the minimap.
pub fn center_from_minimap(
    view: &mut ViewState,
    minimap: &MinimapLayout,
    screen: Vec2,
    image: ImageExtent,
    viewport: ViewportExtent,
) {
    let point = minimap.screen_to_image(image, screen);
    center_on(view, point, image, viewport);
}

/// Jump the view so `image_point` sits at the viewport center, within the
/// clamp policy and with no spring motion.
pub fn center_on(view: &mut ViewState, image_point: Vec2, image: ImageExtent, viewport: ViewportExtent) {
    let pan = view::center_pan_for(image_point, view.zoom, viewport);
    view.target_pan = clamp::clamp_pan(pan, view.zoom, image, viewport);
    view.pan = view.target_pan;
    view.halt();
}

/// Zoom by `exp(delta * sensitivity)` keeping the image point under
/// `pointer` fixed, then recenter fitting axes and clamp the target.
pub fn zoom_at(
    view: &mut ViewState,
    pointer: Vec2,
    delta: f32,
    image: ImageExtent,
    viewport: ViewportExtent,
) {
    let anchor = view.screen_to_image(pointer);
    let factor = (delta * VIEW_ZOOM_SENSITIVITY).exp();
    view.zoom = (view.zoom * factor).clamp(VIEW_MIN_ZOOM, VIEW_MAX_ZOOM);

    // Shift so the anchor lands back under the pointer at the new zoom
    let pan = view.pan + (pointer - view.image_to_screen(anchor));
    view.pan = clamp::center_fitting_axes(pan, view.zoom, image, viewport);
    view.target_pan = clamp::clamp_pan(view.pan, view.zoom, image, viewport);
}

/// Scroll delta synthesized by a zoom shortcut, if `key` is one.
pub fn key_zoom_delta(key: Key, ctrl: bool) -> Option<f32> {
    if !ctrl {
        return None;
    }
    match key {
        Key::Equal | Key::NumpadAdd => Some(VIEW_KEY_ZOOM_STEP),
        Key::Minus | Key::NumpadSubtract => Some(-VIEW_KEY_ZOOM_STEP),
        Key::Other => None,
    }
}
