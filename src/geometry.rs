//! Geometric primitives in device-pixel space.
//!
//! Coordinates are integers with the origin at the top-left corner and y
//! growing downward.

use std::fmt;

/// A pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Create a point from fractional pointer coordinates, rounding half up.
    ///
    /// Coordinates outside the `i32` range clamp to its bounds.
    #[must_use]
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self::new(round_half_up(x), round_half_up(y))
    }

    /// Offset this point by `(dx, dy)`, saturating at the `i32` bounds.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Offset this point by a wide `(dx, dy)`, saturating at the `i32` bounds.
    #[must_use]
    pub fn offset_wide(self, dx: i64, dy: i64) -> Self {
        Self::new(
            saturate(i64::from(self.x) + dx),
            saturate(i64::from(self.y) + dy),
        )
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = (i64::from(other.x) - i64::from(self.x)) as f64;
        let dy = (i64::from(other.y) - i64::from(self.y)) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Chebyshev (chessboard) distance, the step count on an 8-connected grid.
    #[must_use]
    pub fn chebyshev(self, other: Self) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned rectangle given by its corner coordinates.
///
/// `x0..x1` and `y0..y1` are half-open in pixel terms: the rectangle covers
/// `x1 - x0` columns and `y1 - y0` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelRect {
    /// Left edge.
    pub x0: i32,
    /// Top edge.
    pub y0: i32,
    /// Right edge.
    pub x1: i32,
    /// Bottom edge.
    pub y1: i32,
}

impl PixelRect {
    /// Create a rectangle from its corners.
    #[must_use]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.x1.saturating_sub(self.x0)
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.y1.saturating_sub(self.y0)
    }

    /// Check whether a pixel lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.x0 && p.x < self.x1 && p.y >= self.y0 && p.y < self.y1
    }
}

/// Round to the nearest integer, ties toward positive infinity.
///
/// Values beyond the `i32` range clamp to its bounds; NaN maps to zero.
pub(crate) fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Narrow to `i32`, clamping to its bounds.
pub(crate) fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
