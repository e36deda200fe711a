//! Rectangle geometry model.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Geometry of the editable rectangle, expressed in its unrotated frame.
///
/// `(x0, y0)` is the top-left corner in canvas coordinates before the
/// rotation transform is applied. `width` and `height` are signed: during a
/// handle drag they may pass through zero and become negative, leaving the
/// rectangle geometrically inverted. No normalization is performed — the
/// handle layout and rotation math operate on the signed values directly,
/// so an inverted rectangle still renders consistently.
///
/// `angle` is rotation about the rectangle's center in degrees,
/// counter-clockwise for positive values (the `atan2` convention).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectGeometry {
    pub x0: f64,
    pub y0: f64,
    pub width: f64,
    pub height: f64,
    pub angle: f64,
}

impl RectGeometry {
    /// Create a new unrotated rectangle.
    pub fn new(x0: f64, y0: f64, width: f64, height: f64) -> Self {
        Self {
            x0,
            y0,
            width,
            height,
            angle: 0.0,
        }
    }

    /// Top-left corner in the unrotated frame.
    pub fn origin(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    /// Center of the rectangle in the unrotated frame.
    ///
    /// This is also the rotation center. Correct for negative width/height:
    /// the center of an inverted rectangle is the midpoint of its signed
    /// extent.
    pub fn center(&self) -> Point {
        Point::new(self.x0 + self.width * 0.5, self.y0 + self.height * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let geometry = RectGeometry::new(10.0, 20.0, 100.0, 50.0);
        let center = geometry.center();
        assert!((center.x - 60.0).abs() < f64::EPSILON);
        assert!((center.y - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_center_of_inverted_rectangle() {
        let geometry = RectGeometry::new(100.0, 100.0, -40.0, -20.0);
        let center = geometry.center();
        assert!((center.x - 80.0).abs() < f64::EPSILON);
        assert!((center.y - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut geometry = RectGeometry::new(1.0, 2.0, 3.0, 4.0);
        geometry.angle = 45.0;

        let json = serde_json::to_string(&geometry).unwrap();
        let back: RectGeometry = serde_json::from_str(&json).unwrap();

        assert_eq!(geometry, back);
    }
}
