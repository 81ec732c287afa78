//! Stateless geospatial primitives for itinerary planning.
//!
//! `geokit` measures distances between points of interest, computes a
//! representative centre and bounding region for a set of points, orders
//! a visit sequence with a nearest-neighbour heuristic, solves the direct
//! and inverse heading problems, tests point-in-polygon membership and
//! estimates the map viewport zoom level that fits a region.
//!
//! Every operation is a pure function over value types: no shared state,
//! no I/O, safe to call concurrently from any thread. Earth is modelled
//! as a sphere of radius [`EARTH_RADIUS_KM`]; this is not a geodesy
//! library and makes no ellipsoidal corrections.
//!
//! Collection inputs are sparse (`&[Option<Coordinate>]`): absent
//! entries are filtered before computing, never reported as errors.
//!
//! # Examples
//! ```
//! use geokit::{Coordinate, distance, optimal_route};
//!
//! let museum = Coordinate::new(48.8606, 2.3376);
//! let tower = Coordinate::new(48.8584, 2.2945);
//! assert!(distance(museum, tower) < 4.0);
//!
//! let stops = [Some(museum), None, Some(tower)];
//! let route = optimal_route(&stops, None);
//! assert_eq!(route.len(), 2);
//! ```

#![forbid(unsafe_code)]

mod bearing;
mod bounds;
mod centroid;
mod coord;
mod distance;
mod error;
#[cfg(feature = "serde")]
mod geojson;
mod polygon;
mod route;
mod zoom;

pub use bearing::{bearing, destination};
pub use bounds::{BoundingBox, bounding_box};
pub use centroid::centroid;
pub use coord::Coordinate;
pub use distance::{EARTH_RADIUS_KM, distance};
pub use error::EmptyInputError;
#[cfg(feature = "serde")]
pub use geojson::line_string;
pub use polygon::is_inside;
pub use route::{Route, optimal_route};
pub use zoom::{MAX_ZOOM, Viewport, zoom_to_fit};
