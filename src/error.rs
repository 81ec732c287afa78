use thiserror::Error;

/// Error returned when an operation needs at least one coordinate.
///
/// Raised by [`centroid`](crate::centroid()) and
/// [`bounding_box`](crate::bounding_box) once absent entries have been
/// filtered out: there is no sensible default centre or box, so the
/// condition surfaces to the caller instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("at least one coordinate is required")]
pub struct EmptyInputError;
