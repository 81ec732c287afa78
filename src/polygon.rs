//! Point-in-polygon membership test.

use crate::Coordinate;
use crate::coord::present;

/// Test whether `point` lies inside `polygon` by ray casting.
///
/// A horizontal ray cast east from the point toggles an inside flag at
/// every edge crossing; the closing edge from the last vertex back to
/// the first is included. Absent vertices are dropped. Fewer than three
/// remaining vertices cannot produce a crossing, so degenerate polygons
/// report `false` rather than an error.
///
/// Points exactly on an edge may land on either side, as usual for ray
/// casting over floating-point input.
///
/// # Examples
/// ```
/// use geokit::{Coordinate, is_inside};
///
/// let square = [
///     Some(Coordinate::new(-1.0, -1.0)),
///     Some(Coordinate::new(-1.0, 1.0)),
///     Some(Coordinate::new(1.0, 1.0)),
///     Some(Coordinate::new(1.0, -1.0)),
/// ];
/// assert!(is_inside(Coordinate::new(0.0, 0.0), &square));
/// assert!(!is_inside(Coordinate::new(5.0, 5.0), &square));
/// ```
pub fn is_inside(point: Coordinate, polygon: &[Option<Coordinate>]) -> bool {
    let vertices = present(polygon);
    let mut inside = false;

    let mut j = vertices.len().wrapping_sub(1);
    for (i, vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        let straddles = (vi.lat > point.lat) != (vj.lat > point.lat);
        if straddles {
            let crossing_lng =
                (vj.lng - vi.lng) * (point.lat - vi.lat) / (vj.lat - vi.lat) + vi.lng;
            if point.lng < crossing_lng {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}
