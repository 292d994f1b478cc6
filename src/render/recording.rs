//! Backend that records submissions instead of drawing them.

use super::{DrawBatch, RenderBackend};
use crate::color::Color;

/// A single backend operation, in the order it was issued.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// The frame was cleared to the background color.
    Clear,
    /// Triangles were drawn with one uniform color.
    DrawTriangles {
        /// Flat vertex positions, two floats per vertex.
        vertices: Vec<f32>,
        /// Uniform color.
        color: Color,
    },
}

/// Records every submission as [`Command`]s.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    commands: Vec<Command>,
    submissions: usize,
}

impl RecordingBackend {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Number of `submit` calls received.
    #[must_use]
    pub fn submissions(&self) -> usize {
        self.submissions
    }

    /// Number of frame clears.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::Clear))
            .count()
    }

    /// Number of draw calls.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.commands.len() - self.clear_count()
    }

    /// The most recent draw call as `(vertices, color)`.
    #[must_use]
    pub fn last_draw(&self) -> Option<(&[f32], Color)> {
        self.commands.iter().rev().find_map(|c| match c {
            Command::DrawTriangles { vertices, color } => Some((vertices.as_slice(), *color)),
            Command::Clear => None,
        })
    }

    /// Forget everything recorded so far.
    pub fn reset(&mut self) {
        self.commands.clear();
        self.submissions = 0;
    }
}

impl RenderBackend for RecordingBackend {
    fn submit(&mut self, batch: &DrawBatch) {
        self.submissions += 1;
        self.commands.push(Command::Clear);
        if !batch.is_empty() {
            self.commands.push(Command::DrawTriangles {
                vertices: batch.vertices.clone(),
                color: batch.color,
            });
        }
    }
}
