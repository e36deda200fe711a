//! The editable rectangle: geometry, gesture state, and event handling.
//!
//! [`EditableRectangle`] is driven by four events from an external surface:
//! press, pick (what the press landed on), move, and release. All state
//! transitions happen synchronously inside these calls; malformed event
//! sequences are logged and dropped rather than failed.

use kurbo::Point;
use log::warn;

use crate::geometry::RectGeometry;
use crate::gesture::{Gesture, PickTarget};
use crate::handles::{handle_positions, HANDLE_COUNT};
use crate::render::{Frame, Renderer};

/// A single rectangle being edited by direct manipulation.
///
/// Constructed with zeroed, hidden geometry. The host is expected to call
/// [`begin_create`](Self::begin_create) so the first press-drag-release
/// establishes the initial geometry; afterwards the rectangle is mutated in
/// place for the lifetime of the editor.
#[derive(Debug)]
pub struct EditableRectangle<R: Renderer> {
    geometry: RectGeometry,
    gesture: Gesture,
    /// Last pointer position seen inside the surface. Used as the drag or
    /// rotation reference when a pick arrives.
    pointer: Point,
    rect_visible: bool,
    handles_visible: bool,
    handles: [Point; HANDLE_COUNT],
    renderer: R,
}

impl<R: Renderer> EditableRectangle<R> {
    /// Create a new editor with zeroed, hidden geometry.
    pub fn new(renderer: R) -> Self {
        let geometry = RectGeometry::default();
        Self {
            geometry,
            gesture: Gesture::Idle,
            pointer: Point::ZERO,
            rect_visible: false,
            handles_visible: false,
            handles: handle_positions(&geometry),
            renderer,
        }
    }

    /// Arm the initial creation drag.
    ///
    /// Ignored (with a warning) if a gesture is already running.
    pub fn begin_create(&mut self) {
        if let Err(err) = self.gesture.arm_create() {
            warn!("ignoring create request: {err}");
        }
    }

    /// Pointer pressed at `pointer`. Ignored outside the surface.
    ///
    /// In create mode this pins the rectangle origin, zeroes its size, and
    /// makes it visible; for every other mode it only records the press
    /// position for the pick that follows.
    pub fn on_press(&mut self, pointer: Point, within_surface: bool) {
        if !within_surface {
            return;
        }
        self.pointer = pointer;

        if self.gesture == Gesture::Create {
            self.geometry.x0 = pointer.x;
            self.geometry.y0 = pointer.y;
            self.geometry.width = 0.0;
            self.geometry.height = 0.0;
            self.rect_visible = true;
            self.gesture = Gesture::CreateDrag;
            self.apply_geometry();
        }
    }

    /// The press landed on `target`. Starts the matching gesture.
    ///
    /// A pick while a gesture is still running, or naming a handle index
    /// outside 0..8, is a protocol violation: logged and dropped.
    pub fn on_pick(&mut self, target: PickTarget, modifier_held: bool) {
        if let Err(err) = self
            .gesture
            .begin(target, modifier_held, &self.geometry, self.pointer)
        {
            warn!("ignoring pick: {err}");
        }
    }

    /// Pointer moved. Ignored outside the surface or with no gesture active.
    pub fn on_motion(&mut self, pointer: Point, within_surface: bool) {
        if !within_surface {
            return;
        }
        self.pointer = pointer;

        if self.gesture.apply_motion(pointer, &mut self.geometry) {
            self.apply_geometry();
        }
    }

    /// Pointer released. Always ends the gesture and requests a redraw,
    /// even if none was active.
    pub fn on_release(&mut self) {
        let finished = self.gesture.finish();
        if finished == Gesture::CreateDrag {
            self.handles_visible = true;
        }
        self.apply_geometry();
    }

    /// Current geometry.
    pub fn geometry(&self) -> &RectGeometry {
        &self.geometry
    }

    /// Mutable access to the geometry for host-driven edits.
    ///
    /// Call [`apply_geometry`](Self::apply_geometry) afterwards so the
    /// handle layout and renderer catch up; setters have no hidden side
    /// effects.
    pub fn geometry_mut(&mut self) -> &mut RectGeometry {
        &mut self.geometry
    }

    /// Recompute the handle layout from the current geometry and request a
    /// redraw.
    pub fn apply_geometry(&mut self) {
        self.handles = handle_positions(&self.geometry);
        let frame = self.frame();
        self.renderer.request_redraw(&frame);
    }

    /// Current handle positions, in anchor-index order.
    pub fn handle_positions(&self) -> &[Point; HANDLE_COUNT] {
        &self.handles
    }

    /// Whether the handles are currently shown.
    pub fn handles_visible(&self) -> bool {
        self.handles_visible
    }

    /// Show or hide the handles.
    pub fn set_handles_visible(&mut self, visible: bool) {
        self.handles_visible = visible;
    }

    /// Whether the rectangle is currently shown.
    pub fn rect_visible(&self) -> bool {
        self.rect_visible
    }

    /// The gesture currently in progress.
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Snapshot of the current render state.
    pub fn frame(&self) -> Frame {
        Frame {
            geometry: self.geometry,
            rect_visible: self.rect_visible,
            handles: self.handles,
            handles_visible: self.handles_visible,
        }
    }

    /// The renderer this editor draws through.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
