//! Axis-aligned extent of a set of coordinates.

use geo::{Coord, Rect};

use crate::coord::present;
use crate::{Coordinate, EmptyInputError};

/// Smallest axis-aligned latitude/longitude rectangle containing a set
/// of points.
///
/// Values produced by [`bounding_box`] always satisfy
/// `min_lat <= max_lat` and `min_lng <= max_lng`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    /// Southern edge in degrees.
    pub min_lat: f64,
    /// Northern edge in degrees.
    pub max_lat: f64,
    /// Western edge in degrees.
    pub min_lng: f64,
    /// Eastern edge in degrees.
    pub max_lng: f64,
}

impl BoundingBox {
    /// Latitude extent in degrees.
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Longitude extent in degrees.
    pub fn lng_span(&self) -> f64 {
        self.max_lng - self.min_lng
    }
}

impl From<BoundingBox> for Rect<f64> {
    fn from(bounds: BoundingBox) -> Self {
        Self::new(
            Coord {
                x: bounds.min_lng,
                y: bounds.min_lat,
            },
            Coord {
                x: bounds.max_lng,
                y: bounds.max_lat,
            },
        )
    }
}

impl From<Rect<f64>> for BoundingBox {
    fn from(rect: Rect<f64>) -> Self {
        Self {
            min_lat: rect.min().y,
            max_lat: rect.max().y,
            min_lng: rect.min().x,
            max_lng: rect.max().x,
        }
    }
}

/// Compute the bounding box of a sparse coordinate list.
///
/// A single min/max pass per axis. Errors when no coordinates remain
/// after filtering. Regions straddling the ±180° meridian are not
/// special-cased: the box spans the long way around instead.
///
/// # Examples
/// ```
/// use geokit::{Coordinate, bounding_box};
///
/// let points = [
///     Some(Coordinate::new(0.0, 0.0)),
///     Some(Coordinate::new(10.0, 10.0)),
/// ];
/// let bounds = bounding_box(&points)?;
/// assert_eq!(bounds.min_lat, 0.0);
/// assert_eq!(bounds.max_lng, 10.0);
/// # Ok::<(), geokit::EmptyInputError>(())
/// ```
pub fn bounding_box(points: &[Option<Coordinate>]) -> Result<BoundingBox, EmptyInputError> {
    let points = present(points);
    let Some((&first, rest)) = points.split_first() else {
        return Err(EmptyInputError);
    };

    let mut bounds = BoundingBox {
        min_lat: first.lat,
        max_lat: first.lat,
        min_lng: first.lng,
        max_lng: first.lng,
    };
    for point in rest {
        bounds.min_lat = bounds.min_lat.min(point.lat);
        bounds.max_lat = bounds.max_lat.max(point.lat);
        bounds.min_lng = bounds.min_lng.min(point.lng);
        bounds.max_lng = bounds.max_lng.max(point.lng);
    }

    Ok(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_input_errors() {
        assert_eq!(bounding_box(&[]), Err(EmptyInputError));
        assert_eq!(bounding_box(&[None]), Err(EmptyInputError));
    }

    #[rstest]
    fn two_corners_span_the_box() {
        let points = [
            Some(Coordinate::new(0.0, 0.0)),
            Some(Coordinate::new(10.0, 10.0)),
        ];
        let bounds = bounding_box(&points).expect("non-empty input");
        assert_eq!(
            bounds,
            BoundingBox {
                min_lat: 0.0,
                max_lat: 10.0,
                min_lng: 0.0,
                max_lng: 10.0,
            }
        );
    }

    #[rstest]
    fn extremes_come_from_different_points() {
        let points = [
            Some(Coordinate::new(-5.0, 30.0)),
            None,
            Some(Coordinate::new(12.0, -7.5)),
            Some(Coordinate::new(3.0, 11.0)),
        ];
        let bounds = bounding_box(&points).expect("non-empty input");
        assert_eq!(bounds.min_lat, -5.0);
        assert_eq!(bounds.max_lat, 12.0);
        assert_eq!(bounds.min_lng, -7.5);
        assert_eq!(bounds.max_lng, 30.0);
        assert_eq!(bounds.lat_span(), 17.0);
        assert_eq!(bounds.lng_span(), 37.5);
    }

    #[rstest]
    fn single_point_has_zero_spans() {
        let bounds =
            bounding_box(&[Some(Coordinate::new(52.52, 13.405))]).expect("non-empty input");
        assert_eq!(bounds.lat_span(), 0.0);
        assert_eq!(bounds.lng_span(), 0.0);
    }

    #[rstest]
    fn rect_conversion_round_trips() {
        let bounds = BoundingBox {
            min_lat: -5.0,
            max_lat: 12.0,
            min_lng: -7.5,
            max_lng: 30.0,
        };
        let rect = Rect::from(bounds);
        assert_eq!(rect.width(), 37.5);
        assert_eq!(rect.height(), 17.0);
        assert_eq!(BoundingBox::from(rect), bounds);
    }
}
