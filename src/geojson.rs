//! GeoJSON rendering of routes.
//!
//! Serialization stays with the caller for every other type in this
//! crate; routes get a convenience because itinerary frontends feed
//! them straight to map layers as `LineString` features.

use serde_json::{Value, json};

use crate::Route;

/// Render a route as a GeoJSON `Feature` with `LineString` geometry.
///
/// Positions follow the GeoJSON axis order, longitude before latitude.
/// The feature carries the route length in kilometres under the
/// `length` property.
///
/// # Examples
/// ```
/// use geokit::{Coordinate, Route, line_string};
///
/// let route = Route::new(vec![
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(0.0, 1.0),
/// ]);
/// let feature = line_string(&route);
/// assert_eq!(feature["geometry"]["type"], "LineString");
/// assert_eq!(feature["geometry"]["coordinates"][1][0], 1.0);
/// ```
pub fn line_string(route: &Route) -> Value {
    let coordinates: Vec<[f64; 2]> = route
        .coordinates()
        .iter()
        .map(|point| [point.lng, point.lat])
        .collect();

    json!({
        "type": "Feature",
        "geometry": {
            "type": "LineString",
            "coordinates": coordinates,
        },
        "properties": {
            "length": route.total_distance_km(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coordinate;
    use rstest::rstest;

    #[rstest]
    fn feature_positions_are_lng_lat_ordered() {
        let route = Route::new(vec![
            Coordinate::new(48.8566, 2.3522),
            Coordinate::new(51.5074, -0.1278),
        ]);
        let feature = line_string(&route);
        assert_eq!(feature["type"], "Feature");
        assert_eq!(feature["geometry"]["coordinates"][0][0], 2.3522);
        assert_eq!(feature["geometry"]["coordinates"][0][1], 48.8566);
    }

    #[rstest]
    fn length_property_matches_the_route() {
        let route = Route::new(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 1.0),
        ]);
        let feature = line_string(&route);
        let length = feature["properties"]["length"]
            .as_f64()
            .expect("length is numeric");
        assert!((length - route.total_distance_km()).abs() < 1e-12);
    }

    #[rstest]
    fn empty_route_renders_an_empty_line() {
        let feature = line_string(&Route::empty());
        let positions = feature["geometry"]["coordinates"]
            .as_array()
            .expect("coordinates is an array");
        assert!(positions.is_empty());
        assert_eq!(feature["properties"]["length"], 0.0);
    }
}
