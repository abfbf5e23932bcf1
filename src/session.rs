//! Viewer session: all navigation state for one loaded image.
//!
//! Owned by the event loop. Events go in through [`ViewerSession::handle_event`],
//! time goes in through [`ViewerSession::advance`], and [`ViewerSession::frame`]
//! hands the renderer everything it needs for one frame.

use crate::clamp;
use crate::constants::*;
use crate::events::Event;
use crate::input::{self, InputState};
use crate::minimap::MinimapLayout;
use crate::spring;
use crate::view::{ImageExtent, ViewState, ViewportExtent};
use glam::Vec2;

#[derive(Debug, Clone)]
pub struct ViewerSession {
    pub view: ViewState,
    pub image: ImageExtent,
    pub viewport: ViewportExtent,
    pub minimap: MinimapLayout,
    pub input: InputState,
}

/// Render parameters for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameParams {
    pub viewport: ViewportExtent,
    pub pan: Vec2,
    pub zoom: f32,
    pub minimap: MinimapLayout,
    pub minimap_pan: Vec2,
    pub minimap_zoom: f32,
    /// Visible-region quad in minimap-local pixels
    pub indicator: [Vec2; 4],
    /// Minimap outline in screen pixels
    pub border: [Vec2; 4],
}

impl ViewerSession {
    /// Start with the image at 1:1, centered on the viewport.
    pub fn new(image: ImageExtent, viewport: ViewportExtent) -> Self {
        let pan = (viewport.size() - image.size()) * 0.5;
        let mut view = ViewState::new(pan, VIEW_DEFAULT_ZOOM);
        view.target_pan = clamp::clamp_pan(pan, view.zoom, image, viewport);

        Self {
            view,
            image,
            viewport,
            minimap: MinimapLayout::compute(image, viewport),
            input: InputState::new(),
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        input::handle_event(self, event);
    }

    /// Advance the pan spring by `dt` seconds. Frozen during a main-view drag
    /// so the displayed pan tracks the pointer exactly.
    pub fn advance(&mut self, dt: f32) {
        if !self.input.is_dragging_main() {
            spring::step(&mut self.view, dt);
        }
    }

    /// True while the displayed pan can still change without new input:
    /// during a main-view drag or until the spring has settled.
    pub fn is_animating(&self) -> bool {
        self.input.is_dragging_main() || !spring::is_settled(&self.view)
    }

    /// Adopt a new viewport size and pull the view back into a legal position.
    pub fn resize(&mut self, viewport: ViewportExtent) {
        self.viewport = viewport;
        let zoom = self.view.zoom;
        let displayed = self.image.size() * zoom;
        let size = viewport.size();

        for axis in 0..2 {
            if displayed[axis] <= size[axis] {
                let centered = (size[axis] - displayed[axis]) * 0.5;
                self.view.pan[axis] = centered;
                self.view.target_pan[axis] = centered;
            } else {
                if self.view.pan[axis] > 0.0 {
                    self.view.pan[axis] = 0.0;
                    self.view.target_pan[axis] = 0.0;
                }
                if self.view.pan[axis] + displayed[axis] < size[axis] {
                    self.view.pan[axis] = size[axis] - displayed[axis];
                    self.view.target_pan[axis] = self.view.pan[axis];
                }
            }
        }
        self.view.target_pan = clamp::clamp_pan(self.view.target_pan, zoom, self.image, viewport);
        self.minimap = MinimapLayout::compute(self.image, viewport);
        log::debug!("Viewport resized to {}x{}", viewport.width, viewport.height);
    }

    pub fn frame(&mut self) -> FrameParams {
        puffin::profile_function!();
        self.minimap = MinimapLayout::compute(self.image, self.viewport);

        FrameParams {
            viewport: self.viewport,
            pan: self.view.pan,
            zoom: self.view.zoom,
            minimap: self.minimap,
            minimap_pan: self.minimap.pan(self.image),
            minimap_zoom: self.minimap.zoom(self.image),
            indicator: self.minimap.indicator(self.image, &self.view, self.viewport),
            border: self.minimap.border(),
        }
    }
}
