//! Map viewport zoom estimation.

use crate::BoundingBox;

/// Highest zoom level the estimator will return.
pub const MAX_ZOOM: i32 = 18;

/// Web-Mercator base tile size in pixels.
const TILE_SIZE: f64 = 256.0;

/// Pixel dimensions of the viewport a region must fit into.
///
/// `padding_px` keeps the region clear of the viewport edges on every
/// side and defaults to 40 px.
///
/// # Examples
/// ```
/// use geokit::Viewport;
///
/// let viewport = Viewport::new(800.0, 600.0);
/// assert_eq!(viewport.padding_px, 40.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Viewport width in pixels.
    pub width_px: f64,
    /// Viewport height in pixels.
    pub height_px: f64,
    /// Padding in pixels applied to every side.
    pub padding_px: f64,
}

impl Viewport {
    /// Viewport with the default 40 px padding.
    pub const fn new(width_px: f64, height_px: f64) -> Self {
        Self::with_padding(width_px, height_px, 40.0)
    }

    /// Viewport with explicit padding.
    pub const fn with_padding(width_px: f64, height_px: f64, padding_px: f64) -> Self {
        Self {
            width_px,
            height_px,
            padding_px,
        }
    }
}

/// Estimate the integer zoom level at which `bounds` fits `viewport`.
///
/// Each axis contributes `floor(log2(world_span * usable_px /
/// (span_deg * 256)))`; the more constraining axis wins and the result
/// is capped at [`MAX_ZOOM`]. A zero span on one axis leaves the other
/// axis (or the cap) in charge.
///
/// No lower cap is applied: a span wide enough relative to the viewport
/// pushes the estimate below zero, which is logged and returned as-is
/// for the caller to clamp against its map's limits.
///
/// # Examples
/// ```
/// use geokit::{Coordinate, Viewport, bounding_box, zoom_to_fit};
///
/// let bounds = bounding_box(&[
///     Some(Coordinate::new(0.0, 0.0)),
///     Some(Coordinate::new(10.0, 10.0)),
/// ])?;
/// let zoom = zoom_to_fit(&bounds, &Viewport::new(800.0, 600.0));
/// assert_eq!(zoom, 5);
/// # Ok::<(), geokit::EmptyInputError>(())
/// ```
pub fn zoom_to_fit(bounds: &BoundingBox, viewport: &Viewport) -> i32 {
    let usable_width = viewport.width_px - 2.0 * viewport.padding_px;
    let usable_height = viewport.height_px - 2.0 * viewport.padding_px;

    let lng_zoom = axis_zoom(360.0, usable_width, bounds.lng_span());
    let lat_zoom = axis_zoom(180.0, usable_height, bounds.lat_span());

    let zoom = lng_zoom.min(lat_zoom).min(f64::from(MAX_ZOOM));
    if zoom < 0.0 {
        log::warn!("region spans more than the viewport shows at zoom 0 (estimate {zoom})");
    }
    zoom as i32
}

/// Zoom at which `span_deg` of a `world_span_deg` axis fits `usable_px`
/// pixels. Infinite for a zero span, leaving the result to the other
/// axis.
fn axis_zoom(world_span_deg: f64, usable_px: f64, span_deg: f64) -> f64 {
    (world_span_deg * usable_px / (span_deg * TILE_SIZE)).log2().floor()
}
