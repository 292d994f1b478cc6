//! Render submission.
//!
//! A [`RenderBackend`] receives one [`DrawBatch`] per completed stroke: a flat
//! list of pixel-space vertices, a single uniform color and the primitive
//! assembly mode. Every submission clears the frame first, so only the most
//! recent batch is ever visible.
//!
//! Two backends ship with the crate:
//!
//! - [`SoftwareBackend`]: fills triangles into a [`Framebuffer`](crate::framebuffer::Framebuffer)
//! - [`RecordingBackend`]: records submissions as [`Command`]s for inspection

mod recording;
mod software;

pub use recording::{Command, RecordingBackend};
pub use software::SoftwareBackend;

use crate::color::Color;

/// Number of floats describing one vertex (x, y).
pub const FLOATS_PER_VERTEX: usize = 2;

/// How consecutive vertices are assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimitiveMode {
    /// Every three consecutive vertices form an independent triangle.
    #[default]
    Triangles,
}

/// Geometry and color for a single draw call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawBatch {
    /// Flat `[x0, y0, x1, y1, ...]` vertex positions in pixel space.
    pub vertices: Vec<f32>,
    /// Uniform color for every vertex.
    pub color: Color,
    /// Primitive assembly mode.
    pub mode: PrimitiveMode,
}

impl DrawBatch {
    /// Create an empty batch with the given color.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            vertices: Vec::new(),
            color,
            mode: PrimitiveMode::Triangles,
        }
    }

    /// Number of vertices in the batch.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / FLOATS_PER_VERTEX
    }

    /// Number of complete triangles in the batch.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    /// Returns `true` when the batch draws nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over the triangles as `[(x, y); 3]`, dropping any partial tail.
    pub fn triangles(&self) -> impl Iterator<Item = [(f32, f32); 3]> + '_ {
        self.vertices
            .chunks_exact(3 * FLOATS_PER_VERTEX)
            .map(|t| [(t[0], t[1]), (t[2], t[3]), (t[4], t[5])])
    }
}

/// A rendering backend that accepts one draw batch per frame.
///
/// `submit` is blocking: the frame is cleared and the batch drawn before it
/// returns. Backends never accumulate geometry across calls.
pub trait RenderBackend {
    /// Clear the frame to the background color, then draw `batch`.
    ///
    /// An empty batch only clears.
    fn submit(&mut self, batch: &DrawBatch);
}

impl<B: RenderBackend + ?Sized> RenderBackend for &mut B {
    fn submit(&mut self, batch: &DrawBatch) {
        (**self).submit(batch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_counts() {
        let mut batch = DrawBatch::new(Color::WHITE);
        assert!(batch.is_empty());
        batch.vertices = vec![0.0; 24];
        assert_eq!(batch.vertex_count(), 12);
        assert_eq!(batch.triangle_count(), 4);
        assert_eq!(batch.mode, PrimitiveMode::Triangles);
    }

    #[test]
    fn test_batch_triangles() {
        let mut batch = DrawBatch::new(Color::WHITE);
        batch.vertices = vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 9.0, 9.0];
        let tris: Vec<_> = batch.triangles().collect();
        assert_eq!(tris, vec![[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]]);
    }

    #[test]
    fn test_submit_through_mut_reference() {
        fn submit_empty<B: RenderBackend>(mut backend: B) {
            backend.submit(&DrawBatch::new(Color::WHITE));
        }

        let mut backend = RecordingBackend::new();
        submit_empty(&mut backend);
        assert_eq!(backend.clear_count(), 1);
    }
}
