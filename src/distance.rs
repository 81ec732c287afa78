//! Great-circle distance between coordinates.

use crate::Coordinate;

/// Mean Earth radius in kilometres for the spherical model.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two coordinates, in
/// kilometres.
///
/// Symmetric, non-negative and zero for coincident points; defined for
/// every pair of well-formed coordinates. Accuracy is bounded by the
/// spherical approximation, which is ample for itinerary distances.
///
/// # Examples
/// ```
/// use geokit::{Coordinate, distance};
///
/// let paris = Coordinate::new(48.8566, 2.3522);
/// let london = Coordinate::new(51.5074, -0.1278);
/// assert!((distance(paris, london) - 343.5).abs() < 1.0);
/// ```
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
