//! Rectedit Core Library
//!
//! Direct-manipulation editing of a single rectangle on a 2D canvas:
//! creation by drag, translation, edge/corner resizing via eight handles,
//! and free rotation via a modifier-gated handle drag.
//!
//! The crate owns the geometry and the gesture state machine only. The
//! drawing surface, event delivery, and hit-testing are external: the host
//! feeds press/pick/move/release events into [`EditableRectangle`] and
//! implements [`render::Renderer`] to receive a [`render::Frame`] snapshot
//! after every mutation.

pub mod editor;
pub mod geometry;
pub mod gesture;
pub mod handles;
pub mod render;

pub use editor::EditableRectangle;
pub use geometry::RectGeometry;
pub use gesture::{Gesture, GestureError, PickTarget};
pub use handles::{handle_positions, HANDLE_ANCHORS, HANDLE_COUNT, HANDLE_SIZE};
pub use render::{Frame, NullRenderer, RecordingRenderer, Renderer};
