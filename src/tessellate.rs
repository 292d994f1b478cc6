//! Stroke tessellation.
//!
//! Every rasterized point becomes an axis-aligned square of the stroke
//! thickness, emitted as two triangles. The square spans
//! `[p - T/2, p + T/2 + T % 2]` on each axis, so odd thicknesses reach one unit
//! further in the positive direction than the negative one.

use std::fmt;

use crate::color::Color;
use crate::geometry::{PixelRect, Point};
use crate::raster::Shape;
use crate::render::DrawBatch;

/// Vertices emitted for each rasterized point (two triangles).
pub const VERTICES_PER_POINT: usize = 6;

/// Stroke thickness in pixels, always within `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Thickness(u8);

impl Thickness {
    /// Thinnest stroke.
    pub const MIN: Self = Self(1);
    /// Thickest stroke.
    pub const MAX: Self = Self(9);

    /// Create a thickness, `None` outside `1..=9`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The thickness in pixels.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Extent `(low, high)` of the square around coordinate `c`, clamped to
    /// the `i32` range.
    #[must_use]
    pub const fn span(self, c: i32) -> (i32, i32) {
        let t = self.0 as i32;
        let half = t / 2;
        (c.saturating_sub(half), c.saturating_add(half + t % 2))
    }
}

impl Default for Thickness {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for Thickness {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(value).ok_or(value)
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// One completed primitive: its points plus the color and thickness in effect
/// when it was completed.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Rasterized points.
    pub points: Vec<Point>,
    /// Stroke color.
    pub color: Color,
    /// Stroke thickness.
    pub thickness: Thickness,
}

impl Stroke {
    /// Create a stroke from already rasterized points.
    #[must_use]
    pub fn new(points: Vec<Point>, color: Color, thickness: Thickness) -> Self {
        Self {
            points,
            color,
            thickness,
        }
    }

    /// Rasterize `shape` into a stroke.
    #[must_use]
    pub fn from_shape(shape: &Shape, color: Color, thickness: Thickness) -> Self {
        Self::new(shape.rasterize(), color, thickness)
    }

    /// Tessellate this stroke into a draw batch.
    #[must_use]
    pub fn tessellate(&self) -> DrawBatch {
        tessellate(self)
    }
}

/// The square a point expands to at the given thickness.
#[must_use]
pub fn square(point: Point, thickness: Thickness) -> PixelRect {
    let (x0, x1) = thickness.span(point.x);
    let (y0, y1) = thickness.span(point.y);
    PixelRect::new(x0, y0, x1, y1)
}

/// Expand every point of `stroke` into a two-triangle square.
///
/// Triangles are wound `(x0,y0) (x1,y0) (x0,y1)` then `(x0,y1) (x1,y0) (x1,y1)`.
/// Overlapping squares are kept; they overdraw in the same color.
#[must_use]
pub fn tessellate(stroke: &Stroke) -> DrawBatch {
    let mut batch = DrawBatch::new(stroke.color);
    batch.vertices.reserve(stroke.points.len() * VERTICES_PER_POINT * 2);

    for &point in &stroke.points {
        let rect = square(point, stroke.thickness);
        let (x0, y0) = (rect.x0 as f32, rect.y0 as f32);
        let (x1, y1) = (rect.x1 as f32, rect.y1 as f32);

        batch.vertices.extend_from_slice(&[x0, y0, x1, y0, x0, y1]);
        batch.vertices.extend_from_slice(&[x0, y1, x1, y0, x1, y1]);
    }

    batch
}
