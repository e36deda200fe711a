//! Gesture state machine for rectangle editing.
//!
//! One gesture is active at a time. A gesture begins when the host reports
//! what the press landed on ([`PickTarget`]), mutates the geometry on every
//! pointer move, and ends on release. Each state carries exactly the
//! session data that state needs; nothing leaks across states.

use kurbo::Point;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::RectGeometry;
use crate::handles::{HANDLE_ANCHORS, HANDLE_COUNT};

/// What the press landed on when a gesture starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickTarget {
    /// The rectangle body.
    Body,
    /// One of the eight handles, addressed by stable index.
    Handle(usize),
}

/// A gesture transition that the state machine refuses to make.
///
/// These are caller protocol violations, not runtime failures: the editor
/// layer logs them and drops the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GestureError {
    /// A new gesture start arrived before the previous gesture released.
    #[error("a gesture is already in progress")]
    GestureInProgress,
    /// A selection event named a handle index outside 0..8.
    #[error("handle index {0} out of range")]
    HandleOutOfRange(usize),
}

/// The active gesture, if any.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Armed for the initial creation drag; waiting for the press.
    Create,
    /// Creation press received; rubber-banding the initial size.
    CreateDrag,
    /// Dragging the rectangle body.
    BodyDrag {
        /// Rectangle origin at press time.
        start_origin: Point,
        /// Pointer position at press time.
        start_pointer: Point,
    },
    /// Dragging a resize handle.
    HandleDrag {
        /// Index of the handle being dragged.
        handle: usize,
    },
    /// Rotating via a modifier-held handle drag.
    Rotate {
        /// Rotation center, fixed at press time.
        center: Point,
        /// Rectangle angle at press time, in degrees.
        angle_start: f64,
        /// Pointer angle around the center at press time, in degrees.
        pointer_angle_start: f64,
    },
}

/// Pointer angle around `center` in degrees, `atan2` convention.
fn pointer_angle(center: Point, pointer: Point) -> f64 {
    (pointer.y - center.y).atan2(pointer.x - center.x).to_degrees()
}

impl Gesture {
    /// Whether a press-to-release gesture is currently running.
    ///
    /// `Create` does not count: it is armed by the host but nothing is held
    /// down yet, so pointer moves are still no-ops.
    pub fn in_progress(&self) -> bool {
        !matches!(self, Self::Idle | Self::Create)
    }

    /// Start a gesture from a selection event.
    ///
    /// `pointer` is the press position, used as the drag or rotation
    /// reference. Rejected if any gesture (including an armed create) has
    /// not finished yet.
    pub fn begin(
        &mut self,
        target: PickTarget,
        modifier_held: bool,
        geometry: &RectGeometry,
        pointer: Point,
    ) -> Result<(), GestureError> {
        if !matches!(self, Self::Idle) {
            return Err(GestureError::GestureInProgress);
        }

        *self = match target {
            PickTarget::Body => Self::BodyDrag {
                start_origin: geometry.origin(),
                start_pointer: pointer,
            },
            PickTarget::Handle(index) if index >= HANDLE_COUNT => {
                return Err(GestureError::HandleOutOfRange(index));
            }
            PickTarget::Handle(index) if modifier_held => {
                let center = geometry.center();
                let angle_start = geometry.angle;
                debug!("rotation start at {angle_start} degrees");
                Self::Rotate {
                    center,
                    angle_start,
                    pointer_angle_start: pointer_angle(center, pointer),
                }
            }
            PickTarget::Handle(index) => Self::HandleDrag { handle: index },
        };
        debug!("gesture start: {self:?}");
        Ok(())
    }

    /// Arm the creation drag. Only legal while idle.
    pub fn arm_create(&mut self) -> Result<(), GestureError> {
        if !matches!(self, Self::Idle) {
            return Err(GestureError::GestureInProgress);
        }
        *self = Self::Create;
        Ok(())
    }

    /// Mutate the geometry for a pointer move.
    ///
    /// Returns `true` if the geometry changed. `Idle` and armed `Create`
    /// ignore moves.
    pub fn apply_motion(&self, pointer: Point, geometry: &mut RectGeometry) -> bool {
        match *self {
            Self::Idle | Self::Create => false,
            Self::CreateDrag => {
                geometry.width = pointer.x - geometry.x0;
                geometry.height = pointer.y - geometry.y0;
                true
            }
            Self::BodyDrag {
                start_origin,
                start_pointer,
            } => {
                geometry.x0 = start_origin.x + (pointer.x - start_pointer.x);
                geometry.y0 = start_origin.y + (pointer.y - start_pointer.y);
                true
            }
            Self::HandleDrag { handle } => {
                let (px, py) = HANDLE_ANCHORS[handle];
                // Each axis moves the picked edge and pins the opposite one.
                // No minimum-size clamp: width/height may cross zero and the
                // rectangle inverts.
                match px {
                    -1 => {
                        let right = geometry.x0 + geometry.width;
                        geometry.x0 = pointer.x;
                        geometry.width = right - pointer.x;
                    }
                    1 => geometry.width = pointer.x - geometry.x0,
                    _ => {}
                }
                match py {
                    -1 => {
                        let bottom = geometry.y0 + geometry.height;
                        geometry.y0 = pointer.y;
                        geometry.height = bottom - pointer.y;
                    }
                    1 => geometry.height = pointer.y - geometry.y0,
                    _ => {}
                }
                true
            }
            Self::Rotate {
                center,
                angle_start,
                pointer_angle_start,
            } => {
                geometry.angle = angle_start + (pointer_angle(center, pointer) - pointer_angle_start);
                true
            }
        }
    }

    /// End the gesture, returning the state that was active.
    pub fn finish(&mut self) -> Gesture {
        std::mem::take(self)
    }
}
