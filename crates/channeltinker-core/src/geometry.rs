//! Integer positions and distance helpers
//!
//! Positions are signed so that traversal code may generate points outside
//! a surface; callers discard those before touching pixels.

use crate::error::{Error, Result};
use std::fmt;

/// An integer 2D position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    pub fn distance_squared(self, other: Point) -> i64 {
        let dx = self.x as i64 - other.x as i64;
        let dy = self.y as i64 - other.y as i64;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }

    /// Offset relative to `origin`.
    pub fn relative_to(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Euclidean distance between two points of any dimension.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the points have different lengths.
pub fn fdist(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch(a.len(), b.len()));
    }
    Ok(a.iter()
        .zip(b)
        .map(|(p, q)| (p - q) * (p - q))
        .sum::<f64>()
        .sqrt())
}

/// Quadrant of `pos` around `axis` (the origin if `None`).
///
/// Returns 0 through 3 for the 1st through 4th quadrant, counting
/// counter-clockwise from +x/+y. With `inverse_cartesian`, y grows
/// downward as in image coordinates. Points on an axis belong to the
/// quadrant on their non-negative side.
pub fn quadrant_of_pos(pos: Point, axis: Option<Point>, inverse_cartesian: bool) -> u8 {
    let pos = match axis {
        Some(axis) => pos.relative_to(axis),
        None => pos,
    };
    let y = if inverse_cartesian { -pos.y } else { pos.y };
    match (pos.x < 0, y < 0) {
        (true, true) => 2,
        (true, false) => 1,
        (false, true) => 3,
        (false, false) => 0,
    }
}
