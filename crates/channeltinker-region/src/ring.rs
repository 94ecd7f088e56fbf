//! Square ring traversal
//!
//! [`square_gen`] walks the perimeter of the square of a given radius
//! around a center, clockwise from the top-left corner. Both the nearest
//! opaque search and the shape rasterizer expand outward one ring at a
//! time with it.
//!
//! Positions are not checked against any surface; callers discard the
//! ones outside their bounds.

use channeltinker_core::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Right,
    Down,
    Left,
    Up,
}

/// Iterator over one square ring, created by [`square_gen`].
///
/// Yields exactly `8 * radius` distinct positions, or one position (the
/// center) when the radius is 0. A clone continues from the same place;
/// [`SquareRing::restart`] begins a fresh walk.
#[derive(Debug, Clone)]
pub struct SquareRing {
    center: Point,
    radius: u32,
    left: i64,
    right: i64,
    top: i64,
    bottom: i64,
    x: i64,
    y: i64,
    edge: Edge,
    done: bool,
}

/// Walk the ring of `radius` around `center`.
///
/// The walk starts at `(cx - r, cy - r)`, runs right along the top edge,
/// down the right edge, left along the bottom edge and up the left edge,
/// stopping just before it would return to the start.
///
/// # Examples
///
/// ```
/// use channeltinker_core::Point;
/// use channeltinker_region::square_gen;
///
/// let ring: Vec<Point> = square_gen(Point::new(0, 0), 1).collect();
/// assert_eq!(ring.len(), 8);
/// assert_eq!(ring[0], Point::new(-1, -1));
/// assert_eq!(ring[2], Point::new(1, -1));
/// assert_eq!(square_gen(Point::new(5, 5), 0).collect::<Vec<_>>(), vec![Point::new(5, 5)]);
/// ```
pub fn square_gen(center: Point, radius: u32) -> SquareRing {
    let r = radius as i64;
    let (cx, cy) = (center.x as i64, center.y as i64);
    SquareRing {
        center,
        radius,
        left: cx - r,
        right: cx + r,
        top: cy - r,
        bottom: cy + r,
        x: cx - r,
        y: cy - r,
        edge: Edge::Right,
        done: false,
    }
}

impl SquareRing {
    /// Center of the ring.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius of the ring.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Number of positions in a full walk.
    pub fn perimeter_len(&self) -> usize {
        if self.radius == 0 {
            1
        } else {
            8 * self.radius as usize
        }
    }

    /// A fresh walk of the same ring.
    pub fn restart(&self) -> SquareRing {
        square_gen(self.center, self.radius)
    }

    /// Move to the next position.
    ///
    /// Each edge falls through to the next one within the same step when
    /// it runs past its corner, so a zero radius visits only the center.
    fn advance(&mut self) {
        if self.edge == Edge::Right {
            self.x += 1;
            if self.x > self.right {
                self.x = self.right;
                self.edge = Edge::Down;
            }
        }
        if self.edge == Edge::Down {
            self.y += 1;
            if self.y > self.bottom {
                self.y = self.bottom;
                self.edge = Edge::Left;
            }
        }
        if self.edge == Edge::Left {
            self.x -= 1;
            if self.x < self.left {
                self.x = self.left;
                self.edge = Edge::Up;
            }
        }
        if self.edge == Edge::Up {
            self.y -= 1;
            if self.y < self.top {
                self.y = self.top;
                self.done = true;
            }
        }
    }
}

impl Iterator for SquareRing {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        // Saturate corners of rings that reach past the i32 range
        let pos = Point::new(
            self.x.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            self.y.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
        );
        self.advance();
        // The walk ends one step short of the start
        if !self.done && self.x == self.left && self.y == self.top {
            self.done = true;
        }
        Some(pos)
    }
}
