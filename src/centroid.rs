//! Representative centre of a set of coordinates.

use crate::coord::present;
use crate::{Coordinate, EmptyInputError};

/// Centroid of a set of coordinates via the unit-vector mean.
///
/// Each point maps to a unit Cartesian vector; the componentwise mean
/// maps back to latitude/longitude through `atan2`. Unlike a naive
/// arithmetic mean of longitudes, the result stays continuous across
/// the ±180° meridian.
///
/// Absent entries are dropped first; an empty remainder is an error. A
/// single remaining point is returned unchanged, bit for bit.
///
/// # Examples
/// ```
/// use geokit::{Coordinate, centroid};
///
/// let points = [
///     Some(Coordinate::new(0.0, 0.0)),
///     None,
///     Some(Coordinate::new(0.0, 90.0)),
/// ];
/// let centre = centroid(&points)?;
/// assert!((centre.lng - 45.0).abs() < 1e-9);
/// # Ok::<(), geokit::EmptyInputError>(())
/// ```
pub fn centroid(points: &[Option<Coordinate>]) -> Result<Coordinate, EmptyInputError> {
    let points = present(points);
    let Some((&first, rest)) = points.split_first() else {
        return Err(EmptyInputError);
    };
    if rest.is_empty() {
        return Ok(first);
    }

    let (mut x, mut y, mut z) = (0.0_f64, 0.0_f64, 0.0_f64);
    for point in &points {
        let lat = point.lat.to_radians();
        let lng = point.lng.to_radians();
        x += lat.cos() * lng.cos();
        y += lat.cos() * lng.sin();
        z += lat.sin();
    }

    let count = points.len() as f64;
    x /= count;
    y /= count;
    z /= count;

    let lng = y.atan2(x);
    let lat = z.atan2(x.hypot(y));

    Ok(Coordinate::new(lat.to_degrees(), lng.to_degrees()))
}
