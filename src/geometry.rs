//! Points and axis-aligned rectangles used by the quadtree.
//!
//! Rectangles are stored as origin plus size (`x, y, width, height`), the same
//! layout the interactive tooling hands over when a user drags a query box.
//! The `y` axis grows "down" in the naming used here: `top` is the minimum y,
//! `bottom` is the maximum y.

use std::fmt;

/// An immutable 2D coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Creates a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`
    pub fn distance_squared(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`
    pub fn distance(&self, other: &Self) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Fixed child order of a subdivided region.
///
/// The discriminant is the child's index in [`Region::children`](crate::Region::children).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Offset `(0, 0)` from the parent's origin
    NorthWest = 0,
    /// Offset `(w/2, 0)`
    NorthEast = 1,
    /// Offset `(0, h/2)`
    SouthWest = 2,
    /// Offset `(w/2, h/2)`
    SouthEast = 3,
}

impl Quadrant {
    /// All quadrants in child order
    pub const ALL: [Self; 4] =
        [Self::NorthWest, Self::NorthEast, Self::SouthWest, Self::SouthEast];

    /// Index of this quadrant in a children array
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Axis-aligned rectangle: origin `(x, y)` and size `(width, height)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Extent along x
    pub width: f64,
    /// Extent along y
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle from origin and size
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// The unit square `(0, 0, 1, 1)`
    pub const fn unit() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Builds the normalized rectangle spanned by two opposite corners.
    ///
    /// Corner order does not matter, which is what a drag gesture produces.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), (b.x - a.x).abs(), (b.y - a.y).abs())
    }

    /// Minimum x
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Maximum x
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Minimum y
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Maximum y
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Area covered by the rectangle
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// True if the rectangle covers no area
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Half-open containment: `x <= p.x < right` and `y <= p.y < bottom`.
    ///
    /// Sibling quadrants share edges; the half-open test assigns a point on a
    /// shared edge to exactly one of them. A consequence is that points on the
    /// right or bottom edge of the outermost domain are never contained.
    pub fn contains(&self, point: &Point) -> bool {
        self.x <= point.x
            && point.x < self.right()
            && self.y <= point.y
            && point.y < self.bottom()
    }

    /// Closed containment: `x <= p.x <= right` and `y <= p.y <= bottom`.
    ///
    /// Used for range-query membership.
    pub fn contains_closed(&self, point: &Point) -> bool {
        self.x <= point.x
            && point.x <= self.right()
            && self.y <= point.y
            && point.y <= self.bottom()
    }

    /// Strict overlap test. Rectangles that only touch along an edge do not
    /// intersect; a zero-area rectangle still intersects a box it lies
    /// strictly inside of.
    pub fn intersects(&self, other: &Self) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Splits into four equal quadrants, in [`Quadrant::ALL`] order
    pub fn quadrants(&self) -> [Self; 4] {
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        [
            Self::new(self.x, self.y, hw, hh),
            Self::new(self.x + hw, self.y, hw, hh),
            Self::new(self.x, self.y + hh, hw, hh),
            Self::new(self.x + hw, self.y + hh, hw, hh),
        ]
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::unit()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect({}, {}, {}, {})", self.x, self.y, self.width, self.height)
    }
}
