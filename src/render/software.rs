//! CPU backend that fills triangles into a framebuffer.
//!
//! Coverage is decided by edge functions sampled at pixel centers, so a square
//! with integer corners `[x0, x1) × [y0, y1)` covers exactly `x1 - x0` columns
//! and `y1 - y0` rows.

use super::{DrawBatch, RenderBackend};
use crate::color::Color;
use crate::error::Result;
use crate::framebuffer::Framebuffer;

/// Software rasterization backend.
#[derive(Debug, Clone)]
pub struct SoftwareBackend {
    framebuffer: Framebuffer,
    background: Color,
    frames: u64,
}

impl SoftwareBackend {
    /// Create a backend with a `width × height` frame cleared to `background`.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self> {
        let mut framebuffer = Framebuffer::new(width, height)?;
        framebuffer.clear(background.to_rgba());

        Ok(Self {
            framebuffer,
            background,
            frames: 0,
        })
    }

    /// The rendered frame.
    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// The color every frame is cleared to.
    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    /// Number of frames submitted so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Consume the backend, returning its framebuffer.
    #[must_use]
    pub fn into_framebuffer(self) -> Framebuffer {
        self.framebuffer
    }

    fn fill_triangle(&mut self, tri: [(f32, f32); 3], color: Color) {
        let [a, b, c] = tri.map(|(x, y)| (f64::from(x), f64::from(y)));
        let area = edge(a, b, c);
        if area == 0.0 {
            return;
        }

        let width = f64::from(self.framebuffer.width());
        let height = f64::from(self.framebuffer.height());
        let min_x = a.0.min(b.0).min(c.0).floor().max(0.0) as i32;
        let max_x = a.0.max(b.0).max(c.0).ceil().min(width) as i32;
        let min_y = a.1.min(b.1).min(c.1).floor().max(0.0) as i32;
        let max_y = a.1.max(b.1).max(c.1).ceil().min(height) as i32;

        let rgba = color.to_rgba();
        let inside = |px: i32, py: i32| {
            let p = (f64::from(px) + 0.5, f64::from(py) + 0.5);
            let w0 = edge(b, c, p) * area;
            let w1 = edge(c, a, p) * area;
            let w2 = edge(a, b, p) * area;
            w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
        };

        for y in min_y..max_y {
            // Triangles are convex, so covered pixels form one run per row.
            let Some(start) = (min_x..max_x).find(|&x| inside(x, y)) else {
                continue;
            };
            let end = (start..max_x).find(|&x| !inside(x, y)).unwrap_or(max_x);
            self.framebuffer.fill_span(y, start, end, rgba);
        }
    }
}

impl RenderBackend for SoftwareBackend {
    fn submit(&mut self, batch: &DrawBatch) {
        self.frames += 1;
        self.framebuffer.clear(self.background.to_rgba());

        for tri in batch.triangles() {
            self.fill_triangle(tri, batch.color);
        }
    }
}

/// Signed parallelogram area of `(a, b, p)`; its sign tells which side of
/// `a→b` the point `p` lies on.
#[inline]
fn edge(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> f64 {
    (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
}
