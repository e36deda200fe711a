//! Resize/rotate handles laid out around the rotated rectangle.
//!
//! Handle positions are a derived view of the rectangle geometry: they are
//! recomputed from scratch after every geometry mutation and never stored
//! across one. A handle is addressed by its stable index into
//! [`HANDLE_ANCHORS`]; selection events carry that index directly.

use crate::geometry::RectGeometry;
use kurbo::Point;

/// Handle box side length in canvas units.
pub const HANDLE_SIZE: f64 = 10.0;

/// Number of handles around the rectangle.
pub const HANDLE_COUNT: usize = 8;

/// Relative anchor `(px, py)` of each handle, in index order.
///
/// `px = -1` means the handle controls the left edge (the right edge stays
/// fixed during a drag), `px = 1` the right edge, `px = 0` no horizontal
/// effect at all; `py` works the same way vertically. Corners carry two
/// non-zero components, edge midpoints one.
pub const HANDLE_ANCHORS: [(i8, i8); HANDLE_COUNT] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// Compute the canvas position of all eight handles for the given geometry.
///
/// Each handle box is centered on its anchor point of the rectangle's
/// boundary, then the offset from the rectangle center is rotated by the
/// current angle. The math is invariant to the sign of width/height, so
/// inverted rectangles lay out consistently.
pub fn handle_positions(geometry: &RectGeometry) -> [Point; HANDLE_COUNT] {
    let center = geometry.center();
    let (sin_t, cos_t) = geometry.angle.to_radians().sin_cos();

    let mut positions = [Point::ZERO; HANDLE_COUNT];
    for (position, &(px, py)) in positions.iter_mut().zip(HANDLE_ANCHORS.iter()) {
        // The HANDLE_SIZE subtraction centers the handle box on the
        // edge/corner rather than placing its own corner there.
        let dx = 0.5 * (f64::from(px) * geometry.width - HANDLE_SIZE);
        let dy = 0.5 * (f64::from(py) * geometry.height - HANDLE_SIZE);
        *position = Point::new(
            center.x + dx * cos_t - dy * sin_t,
            center.y + dx * sin_t + dy * cos_t,
        );
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrotated_layout() {
        let geometry = RectGeometry::new(10.0, 20.0, 100.0, 50.0);
        let positions = handle_positions(&geometry);

        for (position, &(px, py)) in positions.iter().zip(HANDLE_ANCHORS.iter()) {
            let expected_x =
                geometry.x0 + 0.5 * (1.0 + f64::from(px)) * geometry.width - HANDLE_SIZE / 2.0;
            let expected_y =
                geometry.y0 + 0.5 * (1.0 + f64::from(py)) * geometry.height - HANDLE_SIZE / 2.0;
            assert!((position.x - expected_x).abs() < 1e-9);
            assert!((position.y - expected_y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_full_turn_restores_layout() {
        let mut geometry = RectGeometry::new(5.0, 5.0, 80.0, 40.0);
        geometry.angle = 30.0;
        let before = handle_positions(&geometry);

        geometry.angle += 360.0;
        let after = handle_positions(&geometry);

        for (a, b) in before.iter().zip(after.iter()) {
            assert!((a.x - b.x).abs() < 1e-9);
            assert!((a.y - b.y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rotation_preserves_distance_to_center() {
        let mut geometry = RectGeometry::new(0.0, 0.0, 60.0, 60.0);
        let center = geometry.center();
        let flat = handle_positions(&geometry);

        geometry.angle = 75.0;
        let rotated = handle_positions(&geometry);

        for (a, b) in flat.iter().zip(rotated.iter()) {
            let da = a.distance(center);
            let db = b.distance(center);
            assert!((da - db).abs() < 1e-9);
        }
    }

    #[test]
    fn test_negative_size_layout() {
        // Inverted rectangle: signed math keeps the anchor mapping intact,
        // the (1, 1) handle just lands on the flipped corner.
        let geometry = RectGeometry::new(100.0, 100.0, -40.0, -20.0);
        let positions = handle_positions(&geometry);

        let bottom_right = positions[4];
        assert!((bottom_right.x - (60.0 - HANDLE_SIZE / 2.0)).abs() < 1e-9);
        assert!((bottom_right.y - (80.0 - HANDLE_SIZE / 2.0)).abs() < 1e-9);
    }
}
