//! Geographic coordinate value type.
//!
//! [`Coordinate`] is the shared currency of every operation in this
//! crate: a latitude/longitude pair in degrees on a sphere approximating
//! Earth. Conversions to and from the `geo` primitives follow that
//! crate's convention of `x = longitude`, `y = latitude`.

use geo::{Coord, Point};

/// A position on the sphere, in degrees.
///
/// Latitude is positive north, longitude positive east. Ranges are not
/// validated: callers own input hygiene, and out-of-range values flow
/// through the trigonometry unchecked.
///
/// # Examples
/// ```
/// use geokit::Coordinate;
///
/// let berlin = Coordinate::new(52.52, 13.405);
/// assert_eq!(berlin.lat, 52.52);
/// assert_eq!(berlin.lng, 13.405);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lng: f64,
}

impl Coordinate {
    /// Construct a coordinate from degrees.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            x: coordinate.lng,
            y: coordinate.lat,
        }
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(coord: Coord<f64>) -> Self {
        Self {
            lat: coord.y,
            lng: coord.x,
        }
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        Self::new(coordinate.lng, coordinate.lat)
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(point: Point<f64>) -> Self {
        Self {
            lat: point.y(),
            lng: point.x(),
        }
    }
}

/// Drop absent entries from a sparse coordinate list.
///
/// Every collection-taking entry point filters through here before
/// computing.
pub(crate) fn present(points: &[Option<Coordinate>]) -> Vec<Coordinate> {
    points.iter().copied().flatten().collect()
}
