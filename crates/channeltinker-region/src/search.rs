//! Nearest opaque pixel search
//!
//! [`find_opaque_pos`] expands square rings around a position and returns
//! the in-bounds pixel nearest to it (Euclidean) whose alpha reaches a
//! threshold and which lies within `max_radius + 1` of it. Among equally
//! near pixels, the one visited first wins:
//! smaller rings before larger ones, then clockwise order within a ring
//! starting from the ring's top-left corner.
//!
//! # Cost
//!
//! One call visits at most every position within `max_radius`, which is
//! O(max_radius²). The scan keeps the best candidate as it goes and stops
//! once no larger ring can hold a nearer position, so a pixel with an
//! opaque neighbor costs only a few rings. Calling it for every pixel of
//! a mostly transparent surface ([`crate::halo::extend`]) is still
//! O(width² × height²) in the worst case.

use crate::error::{RegionError, RegionResult};
use crate::ring::square_gen;
use channeltinker_core::{ChannelType, PixelSurface, Point, layout};

/// Parameters for [`find_opaque_pos`]
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    /// Accept pixels whose alpha is at least this (0.0 to 1.0)
    pub good_minimum: f64,
    /// Largest ring radius to visit; by default the largest distance from
    /// the center to a surface edge
    pub max_radius: Option<u32>,
    /// Treat the surface as this size instead of its own
    pub bounds: Option<(u32, u32)>,
    /// Only accept positions within `max_radius + 1` of the center (on by
    /// default); off, the corners of the largest ring are accepted too
    pub circular: bool,
    /// Never return the center itself
    pub exclude_center: bool,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            good_minimum: 1.0,
            max_radius: None,
            bounds: None,
            circular: true,
            exclude_center: false,
        }
    }
}

impl SearchQuery {
    /// Create a query with an alpha threshold
    pub fn new(good_minimum: f64) -> Self {
        Self {
            good_minimum,
            ..Default::default()
        }
    }

    /// Limit the search radius
    pub fn with_max_radius(mut self, max_radius: u32) -> Self {
        self.max_radius = Some(max_radius);
        self
    }

    /// Search as if the surface had this size
    pub fn with_bounds(mut self, width: u32, height: u32) -> Self {
        self.bounds = Some((width, height));
        self
    }

    /// Limit accepted positions to a circle, or accept the whole square
    pub fn with_circular(mut self, circular: bool) -> Self {
        self.circular = circular;
        self
    }

    /// Skip the center position
    pub fn with_exclude_center(mut self, exclude_center: bool) -> Self {
        self.exclude_center = exclude_center;
        self
    }
}

/// Result of [`find_opaque_pos`]
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The nearest acceptable position
    Found { position: Point, distance: f64 },
    /// Nothing reached the threshold
    NotFound {
        /// Highest alpha seen, `None` if no in-bounds pixel was visited
        max_alpha: Option<f64>,
    },
}

impl SearchOutcome {
    /// The found position, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            SearchOutcome::Found { position, .. } => Some(*position),
            SearchOutcome::NotFound { .. } => None,
        }
    }

    /// Whether a position was found.
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }
}

/// Check that a surface holds normalized float channels with alpha, and
/// return the alpha index.
pub(crate) fn require_float_alpha<S: PixelSurface + ?Sized>(surface: &S) -> RegionResult<usize> {
    let channel_type = surface.channel_type();
    if channel_type != ChannelType::NormalizedFloat {
        return Err(RegionError::UnsupportedPixelFormat {
            expected: ChannelType::NormalizedFloat,
            actual: channel_type.to_string(),
        });
    }
    surface
        .alpha_index()
        .ok_or_else(|| RegionError::MissingAlphaChannel {
            layout: layout::band_string(surface.channel_layout()),
        })
}

/// Default search radius: the largest distance from `center` to an edge.
pub fn default_max_radius(center: Point, (width, height): (u32, u32)) -> u32 {
    let (cx, cy) = (center.x as i64, center.y as i64);
    let sides = [cx.abs(), (width as i64 - cx).abs(), cy.abs(), (height as i64 - cy).abs()];
    sides.into_iter().max().unwrap_or(0).min(u32::MAX as i64) as u32
}

/// Find the nearest position to `center` whose alpha is at least
/// `query.good_minimum`.
///
/// # Errors
///
/// - [`RegionError::UnsupportedPixelFormat`] if the surface does not hold
///   normalized float channels, or a visited alpha is above 1.0
/// - [`RegionError::MissingAlphaChannel`] if the layout has no alpha
/// - [`RegionError::InvalidParameters`] if `good_minimum` is above 1.0
pub fn find_opaque_pos<S: PixelSurface + ?Sized>(
    surface: &S,
    center: Point,
    query: &SearchQuery,
) -> RegionResult<SearchOutcome> {
    let alpha_index = require_float_alpha(surface)?;
    if query.good_minimum.is_nan() || query.good_minimum > 1.0 {
        return Err(RegionError::InvalidParameters(format!(
            "good_minimum must be between 0.0 and 1.0, got {}",
            query.good_minimum
        )));
    }
    let good_minimum = query.good_minimum.max(0.0);
    let (w, h) = query.bounds.unwrap_or_else(|| surface.size());
    let max_radius = query
        .max_radius
        .unwrap_or_else(|| default_max_radius(center, (w, h)));
    let cutoff = max_radius as f64 + 1.0;
    let cutoff_sq = cutoff * cutoff;

    let mut best: Option<(Point, i64)> = None;
    let mut max_alpha: Option<f64> = None;

    for r in 0..=max_radius {
        let r_sq = r as i64 * r as i64;
        if best.is_some_and(|(_, dsq)| r_sq >= dsq) {
            break;
        }
        for pos in square_gen(center, r) {
            if pos.x < 0 || pos.y < 0 || pos.x as i64 >= w as i64 || pos.y as i64 >= h as i64 {
                continue;
            }
            if query.exclude_center && pos == center {
                continue;
            }
            let dsq = pos.distance_squared(center);
            if query.circular && dsq as f64 > cutoff_sq {
                continue;
            }
            // Equal distance keeps the earlier position
            if best.is_some_and(|(_, best_dsq)| dsq >= best_dsq) {
                continue;
            }
            let alpha = surface.get_channel(pos.x as u32, pos.y as u32, alpha_index)?;
            if alpha > 1.0 {
                return Err(RegionError::UnsupportedPixelFormat {
                    expected: ChannelType::NormalizedFloat,
                    actual: format!("alpha {alpha} at {pos}"),
                });
            }
            if max_alpha.is_none_or(|m| alpha > m) {
                max_alpha = Some(alpha);
            }
            if alpha >= good_minimum {
                best = Some((pos, dsq));
            }
        }
    }

    match best {
        Some((position, dsq)) => {
            log::trace!("find_opaque_pos {center}: found {position}");
            Ok(SearchOutcome::Found {
                position,
                distance: (dsq as f64).sqrt(),
            })
        }
        None => {
            log::warn!(
                "find_opaque_pos {center}: nothing reached alpha {good_minimum} within radius \
                 {max_radius} (highest alpha {max_alpha:?})"
            );
            Ok(SearchOutcome::NotFound { max_alpha })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use channeltinker_core::{Canvas, Pixel};

    fn clear(w: u32, h: u32) -> Canvas {
        Canvas::rgba_float(w, h).unwrap()
    }

    fn opaque(canvas: &mut Canvas, x: u32, y: u32) {
        canvas.put_pixel(x, y, &Pixel::rgba(1.0, 1.0, 1.0, 1.0)).unwrap();
    }

    #[test]
    fn test_center_is_found_at_zero() {
        let mut c = clear(5, 5);
        opaque(&mut c, 2, 2);
        let out = find_opaque_pos(&c, Point::new(2, 2), &SearchQuery::new(1.0)).unwrap();
        assert_eq!(
            out,
            SearchOutcome::Found {
                position: Point::new(2, 2),
                distance: 0.0
            }
        );
    }

    #[test]
    fn test_nearest_wins_over_ring_order() {
        let mut c = clear(7, 7);
        // Corner of ring 1 (distance sqrt 2) and edge of ring 2 (distance 2)
        opaque(&mut c, 4, 4);
        opaque(&mut c, 3, 1);
        let out = find_opaque_pos(&c, Point::new(3, 3), &SearchQuery::new(1.0)).unwrap();
        assert_eq!(out.position(), Some(Point::new(4, 4)));

        // A ring-2 edge pixel beats a ring-2 corner visited earlier
        let mut c = clear(7, 7);
        opaque(&mut c, 1, 1);
        opaque(&mut c, 5, 3);
        let out = find_opaque_pos(&c, Point::new(3, 3), &SearchQuery::new(1.0)).unwrap();
        assert_eq!(out.position(), Some(Point::new(5, 3)));
    }

    #[test]
    fn test_ties_keep_traversal_order() {
        let mut c = clear(5, 5);
        // All four edge midpoints of ring 1; top comes first clockwise
        opaque(&mut c, 2, 1);
        opaque(&mut c, 3, 2);
        opaque(&mut c, 2, 3);
        opaque(&mut c, 1, 2);
        let out = find_opaque_pos(&c, Point::new(2, 2), &SearchQuery::new(1.0)).unwrap();
        assert_eq!(out.position(), Some(Point::new(2, 1)));
    }

    #[test]
    fn test_not_found_reports_max_alpha() {
        let mut c = clear(3, 3);
        c.put_pixel(0, 0, &Pixel::rgba(0.0, 0.0, 0.0, 0.4)).unwrap();
        let out = find_opaque_pos(&c, Point::new(1, 1), &SearchQuery::new(0.5)).unwrap();
        assert_eq!(out, SearchOutcome::NotFound { max_alpha: Some(0.4) });
        assert!(!out.is_found());
    }

    #[test]
    fn test_exclude_center() {
        let mut c = clear(3, 3);
        opaque(&mut c, 1, 1);
        opaque(&mut c, 2, 1);
        let q = SearchQuery::new(1.0).with_exclude_center(true);
        let out = find_opaque_pos(&c, Point::new(1, 1), &q).unwrap();
        assert_eq!(out.position(), Some(Point::new(2, 1)));
    }

    #[test]
    fn test_radius_and_bounds_limit_search() {
        let mut c = clear(9, 1);
        opaque(&mut c, 8, 0);
        let q = SearchQuery::new(1.0).with_max_radius(3);
        assert!(!find_opaque_pos(&c, Point::new(0, 0), &q).unwrap().is_found());
        let q = SearchQuery::new(1.0).with_bounds(8, 1);
        assert!(!find_opaque_pos(&c, Point::new(0, 0), &q).unwrap().is_found());
        let found = find_opaque_pos(&c, Point::new(0, 0), &SearchQuery::new(1.0)).unwrap();
        assert_eq!(found.position(), Some(Point::new(8, 0)));
    }

    #[test]
    fn test_circular_cutoff() {
        let mut c = clear(7, 7);
        opaque(&mut c, 6, 6);
        // Corner at distance sqrt(18) > 3 + 1
        let q = SearchQuery::new(1.0).with_max_radius(3).with_circular(true);
        assert!(!find_opaque_pos(&c, Point::new(3, 3), &q).unwrap().is_found());
        let q = SearchQuery::new(1.0).with_max_radius(3).with_circular(false);
        assert!(find_opaque_pos(&c, Point::new(3, 3), &q).unwrap().is_found());
        // The default radius is 4 here, and sqrt(18) <= 4 + 1
        let q = SearchQuery::new(1.0);
        let out = find_opaque_pos(&c, Point::new(3, 3), &q).unwrap();
        assert_eq!(out.position(), Some(Point::new(6, 6)));
    }

    #[test]
    fn test_default_query_is_circular() {
        let mut c = clear(10, 10);
        opaque(&mut c, 9, 9);
        // Default radius 10, cutoff 11, corner at sqrt(162)
        let out = find_opaque_pos(&c, Point::new(0, 0), &SearchQuery::new(1.0)).unwrap();
        assert_eq!(out, SearchOutcome::NotFound { max_alpha: Some(0.0) });
        let q = SearchQuery::new(1.0).with_circular(false);
        let out = find_opaque_pos(&c, Point::new(0, 0), &q).unwrap();
        assert_eq!(out.position(), Some(Point::new(9, 9)));
    }

    #[test]
    fn test_short_pixel_is_an_error() {
        use channeltinker_core::{ChannelId, Error};

        // Claims RGBA but hands out RGB pixels
        struct Short;
        impl PixelSurface for Short {
            fn size(&self) -> (u32, u32) {
                (1, 1)
            }
            fn get_pixel(&self, _x: u32, _y: u32) -> channeltinker_core::Result<Pixel> {
                Ok(Pixel::rgb(1.0, 1.0, 1.0))
            }
            fn put_pixel(&mut self, _: u32, _: u32, _: &Pixel) -> channeltinker_core::Result<()> {
                Ok(())
            }
            fn channel_layout(&self) -> &[ChannelId] {
                layout::RGBA
            }
            fn channel_type(&self) -> ChannelType {
                ChannelType::NormalizedFloat
            }
        }
        assert!(matches!(
            find_opaque_pos(&Short, Point::new(0, 0), &SearchQuery::default()),
            Err(RegionError::Core(Error::ChannelCountMismatch {
                expected: 4,
                actual: 3
            }))
        ));
    }

    #[test]
    fn test_format_requirements() {
        let int = Canvas::rgba8(2, 2).unwrap();
        assert!(matches!(
            find_opaque_pos(&int, Point::new(0, 0), &SearchQuery::default()),
            Err(RegionError::UnsupportedPixelFormat { .. })
        ));
        let rgb = Canvas::new(2, 2, layout::RGB, ChannelType::NormalizedFloat).unwrap();
        assert!(matches!(
            find_opaque_pos(&rgb, Point::new(0, 0), &SearchQuery::default()),
            Err(RegionError::MissingAlphaChannel { .. })
        ));
        let c = clear(2, 2);
        assert!(matches!(
            find_opaque_pos(&c, Point::new(0, 0), &SearchQuery::new(2.0)),
            Err(RegionError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_negative_threshold_accepts_anything() {
        let c = clear(2, 2);
        let out = find_opaque_pos(&c, Point::new(1, 1), &SearchQuery::new(-3.0)).unwrap();
        assert_eq!(out.position(), Some(Point::new(1, 1)));
    }
}
