//! Behaviour tests for route ordering and its GeoJSON rendering.

use geokit::{Coordinate, distance, optimal_route};
use rstest::rstest;

fn stops() -> Vec<Option<Coordinate>> {
    vec![
        Some(Coordinate::new(48.8606, 2.3376)), // Louvre
        Some(Coordinate::new(48.8530, 2.3499)), // Notre-Dame
        Some(Coordinate::new(48.8584, 2.2945)), // Eiffel Tower
        Some(Coordinate::new(48.8867, 2.3431)), // Sacré-Cœur
    ]
}

#[rstest]
fn tour_starts_at_the_first_stop_and_walks_nearest_first() {
    let route = optimal_route(&stops(), None);
    let ordered = route.coordinates();
    assert_eq!(ordered.len(), 4);
    assert_eq!(ordered[0], Coordinate::new(48.8606, 2.3376));
    // Notre-Dame is the Louvre's nearest neighbour among the stops.
    assert_eq!(ordered[1], Coordinate::new(48.8530, 2.3499));
}

#[rstest]
fn greedy_tour_is_no_longer_than_the_input_order() {
    let input_order: Vec<Coordinate> = stops().into_iter().flatten().collect();
    let input_length = geokit::Route::new(input_order).total_distance_km();
    let tour_length = optimal_route(&stops(), None).total_distance_km();
    assert!(tour_length <= input_length + 1e-9);
}

#[rstest]
fn hotel_start_prepends_the_tour() {
    let hotel = Coordinate::new(48.8708, 2.3320);
    let route = optimal_route(&stops(), Some(hotel));
    assert_eq!(route.len(), 5);
    assert_eq!(route.coordinates()[0], hotel);
}

#[rstest]
fn each_leg_is_the_greedy_minimum_over_the_remainder() {
    let route = optimal_route(&stops(), None);
    let ordered = route.coordinates();
    for (index, current) in ordered.iter().enumerate().skip(1) {
        let previous = ordered[index - 1];
        for later in &ordered[index + 1..] {
            assert!(
                distance(previous, *current) <= distance(previous, *later) + 1e-9,
                "stop {index} is not the nearest remaining point"
            );
        }
    }
}

#[cfg(feature = "serde")]
#[rstest]
fn geojson_line_string_mirrors_the_tour() {
    let route = optimal_route(&stops(), None);
    let feature = geokit::line_string(&route);

    assert_eq!(feature["geometry"]["type"], "LineString");
    let positions = feature["geometry"]["coordinates"]
        .as_array()
        .expect("coordinates is an array");
    assert_eq!(positions.len(), route.len());

    let first = route.coordinates()[0];
    assert_eq!(positions[0][0], first.lng);
    assert_eq!(positions[0][1], first.lat);

    let length = feature["properties"]["length"]
        .as_f64()
        .expect("length is numeric");
    assert!((length - route.total_distance_km()).abs() < 1e-12);
}
