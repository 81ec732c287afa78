//! Visit-order heuristics over sets of coordinates.

use crate::coord::present;
use crate::{Coordinate, distance};

/// An ordered visiting sequence.
///
/// Order is significant: a route is a proposed visit sequence produced
/// by [`optimal_route`], not the input order.
///
/// # Examples
/// ```
/// use geokit::{Coordinate, Route};
///
/// let route = Route::new(vec![
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(0.0, 1.0),
/// ]);
/// assert_eq!(route.len(), 2);
/// assert!((route.total_distance_km() - 111.2).abs() < 0.1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    coordinates: Vec<Coordinate>,
}

impl Route {
    /// Construct a route from an already-ordered sequence.
    pub const fn new(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }

    /// Construct a route with no stops.
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Stops in visiting order.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Whether the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Total length of the route in kilometres.
    ///
    /// Pairwise haversine sum along the sequence; zero for fewer than
    /// two stops.
    pub fn total_distance_km(&self) -> f64 {
        self.coordinates
            .windows(2)
            .map(|leg| distance(leg[0], leg[1]))
            .sum()
    }
}

impl From<Route> for Vec<Coordinate> {
    fn from(route: Route) -> Self {
        route.coordinates
    }
}

impl IntoIterator for Route {
    type Item = Coordinate;
    type IntoIter = std::vec::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.into_iter()
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.iter()
    }
}

/// Order a set of points into a visiting sequence with the greedy
/// nearest-neighbour heuristic.
///
/// From a seed stop, the closest unvisited point by haversine distance
/// is appended until none remain; ties go to the earliest input
/// position. The result approximates a shortest Hamiltonian path — this
/// is a fast heuristic for itinerary-sized inputs, not a
/// Traveling-Salesman solver. `O(n²)` distance evaluations.
///
/// Absent entries are dropped first; zero or one remaining point comes
/// back unchanged. With `start: None` the tour seeds from the first
/// remaining point and the output is a permutation of the filtered
/// input. With `Some(start)` the start point becomes the first stop: a
/// point equal to it is moved to the front, otherwise the start point
/// is inserted ahead of the input points.
///
/// # Examples
/// ```
/// use geokit::{Coordinate, optimal_route};
///
/// let points = [
///     Some(Coordinate::new(0.0, 0.0)),
///     Some(Coordinate::new(0.0, 1.0)),
///     Some(Coordinate::new(0.0, 5.0)),
///     Some(Coordinate::new(0.0, 2.0)),
/// ];
/// let route = optimal_route(&points, None);
/// let longitudes: Vec<f64> = route.coordinates().iter().map(|p| p.lng).collect();
/// assert_eq!(longitudes, vec![0.0, 1.0, 2.0, 5.0]);
/// ```
pub fn optimal_route(points: &[Option<Coordinate>], start: Option<Coordinate>) -> Route {
    let mut remaining = present(points);
    if remaining.len() <= 1 && start.is_none() {
        return Route::new(remaining);
    }

    let seed = match start {
        Some(start_point) => {
            if let Some(position) = remaining.iter().position(|point| *point == start_point) {
                remaining.remove(position);
            }
            start_point
        }
        None => remaining.remove(0),
    };

    let mut coordinates = Vec::with_capacity(remaining.len() + 1);
    coordinates.push(seed);

    let mut current = seed;
    while !remaining.is_empty() {
        let nearest = nearest_index(current, &remaining);
        current = remaining.remove(nearest);
        coordinates.push(current);
    }

    log::debug!("nearest-neighbour tour over {} stops", coordinates.len());
    Route::new(coordinates)
}

/// Index of the candidate closest to `from`; earliest index wins ties.
fn nearest_index(from: Coordinate, candidates: &[Coordinate]) -> usize {
    let mut nearest = 0;
    let mut best = f64::INFINITY;
    for (index, candidate) in candidates.iter().enumerate() {
        let d = distance(from, *candidate);
        if d < best {
            best = d;
            nearest = index;
        }
    }
    nearest
}
