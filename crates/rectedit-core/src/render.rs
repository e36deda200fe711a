//! The seam to the external rendering surface.
//!
//! The core never draws. After every geometry mutation it hands the
//! renderer a [`Frame`] snapshot and moves on; drawing latency and
//! completion are the surface's problem.

use crate::geometry::RectGeometry;
use crate::handles::HANDLE_COUNT;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Everything the external renderer needs for one redraw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Current rectangle geometry in the unrotated frame.
    pub geometry: RectGeometry,
    /// Whether the rectangle should be drawn at all.
    pub rect_visible: bool,
    /// Position of each handle, in [`crate::handles::HANDLE_ANCHORS`] order.
    pub handles: [Point; HANDLE_COUNT],
    /// Whether the handles should be drawn.
    pub handles_visible: bool,
}

/// Redraw sink implemented by the external rendering surface.
pub trait Renderer {
    /// Request a redraw for the given frame. Fire-and-forget.
    fn request_redraw(&mut self, frame: &Frame);
}

/// Renderer that discards every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn request_redraw(&mut self, _frame: &Frame) {}
}

/// Renderer that records every frame it is asked to draw.
///
/// Stands in for the drawing surface in tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    /// Frames in request order.
    pub frames: Vec<Frame>,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently requested frame.
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl Renderer for RecordingRenderer {
    fn request_redraw(&mut self, frame: &Frame) {
        self.frames.push(*frame);
    }
}
