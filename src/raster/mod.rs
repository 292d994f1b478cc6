//! Rasterization of geometric primitives into pixel points.
//!
//! Provides integer-only rasterization algorithms for the shapes a stroke can
//! take.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: 8-connected segment between two pixels
//! - **Triangle Outline**: three Bresenham edges, concatenated
//! - **Midpoint Circle**: one octant walked, mirrored into the other seven
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display
//!   of circular arcs." *Communications of the ACM*, 20(2).

mod primitives;

pub use primitives::{circle, line, radius_through, triangle};

use crate::geometry::Point;

/// A primitive ready to be rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Segment between two endpoints.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
    /// Triangle outline over three vertices.
    Triangle([Point; 3]),
    /// Circle outline.
    Circle {
        /// Center point.
        center: Point,
        /// Radius in pixels.
        radius: u32,
    },
}

impl Shape {
    /// Circle centered on `center` whose circumference passes through `edge`.
    #[must_use]
    pub fn circle_through(center: Point, edge: Point) -> Self {
        Self::Circle {
            center,
            radius: radius_through(center, edge),
        }
    }

    /// Rasterize this shape into its ordered pixel points.
    #[must_use]
    pub fn rasterize(&self) -> Vec<Point> {
        match *self {
            Self::Line { from, to } => line(from, to),
            Self::Triangle([a, b, c]) => triangle(a, b, c),
            Self::Circle { center, radius } => circle(center, radius),
        }
    }

    /// Short name used in log output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Line { .. } => "line",
            Self::Triangle(_) => "triangle",
            Self::Circle { .. } => "circle",
        }
    }
}
