//! Direct and inverse heading problems on the sphere.

use crate::{Coordinate, EARTH_RADIUS_KM};

/// Initial great-circle bearing from `a` toward `b`, in degrees
/// clockwise from north, within `[0, 360)`.
///
/// The heading drifts along a great circle; this is the departure
/// bearing at `a`, not an average over the leg.
///
/// # Examples
/// ```
/// use geokit::{Coordinate, bearing};
///
/// let origin = Coordinate::new(0.0, 0.0);
/// let east = Coordinate::new(0.0, 1.0);
/// assert!((bearing(origin, east) - 90.0).abs() < 1e-9);
/// ```
pub fn bearing(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Coordinate reached by travelling `distance_km` from `start` along
/// the initial heading `bearing_deg`, on a sphere of radius
/// [`EARTH_RADIUS_KM`].
///
/// Inverse of [`distance`](crate::distance()) and [`bearing`]: for legs
/// short against the Earth radius, `distance(start, destination(start,
/// b, d))` recovers `d` and `bearing(start, ..)` recovers `b` to within
/// floating tolerance. The resulting longitude is not re-normalised
/// into `[-180, 180]`.
///
/// # Examples
/// ```
/// use geokit::{Coordinate, destination, distance};
///
/// let start = Coordinate::new(0.0, 0.0);
/// let reached = destination(start, 90.0, 100.0);
/// assert!((distance(start, reached) - 100.0).abs() < 0.1);
/// ```
pub fn destination(start: Coordinate, bearing_deg: f64, distance_km: f64) -> Coordinate {
    let lat1 = start.lat.to_radians();
    let lng1 = start.lng.to_radians();
    let heading = bearing_deg.to_radians();
    let angular = distance_km / EARTH_RADIUS_KM;

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * heading.cos()).asin();
    let lng2 = lng1
        + (heading.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    Coordinate::new(lat2.to_degrees(), lng2.to_degrees())
}
