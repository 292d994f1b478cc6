//! # Trueno-Sketch
//!
//! Integer rasterization of lines, triangle outlines and circles, with thick
//! stroke tessellation for triangle-based renderers.
//!
//! A click-driven [`Session`](session::Session) collects points, rasterizes the
//! finished shape with a Bresenham-family algorithm, expands each pixel into a
//! square of the current thickness and submits the resulting triangles to a
//! [`RenderBackend`](render::RenderBackend) as a single draw call.
//!
//! ## Features
//!
//! - **Integer rasterizers**: Bresenham lines, triangle outlines, midpoint circles
//! - **Stroke tessellation**: two triangles per pixel, thickness 1-9
//! - **Interactive session**: mode, palette color, thickness and click buffering
//! - **Software backend**: fills triangles into a framebuffer, exportable as PNG
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_sketch::prelude::*;
//!
//! let backend = SoftwareBackend::new(64, 64, Color::WHITE)?;
//! let mut session = Session::new(Exercise::Lines, backend);
//!
//! session.click(Point::new(0, 0));
//! session.click(Point::new(5, 0));
//!
//! let fb = session.backend().framebuffer();
//! assert_eq!(fb.count_pixels(Rgba::BLUE), 6);
//! # Ok::<(), trueno_sketch::Error>(())
//! ```
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   *IBM Systems Journal*, 4(1), 25-30.
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display
//!   of circular arcs." *Communications of the ACM*, 20(2), 100-106.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and the indexed palette.
pub mod color;

/// Core framebuffer for pixel output.
pub mod framebuffer;

/// Pixel-space points and rectangles.
pub mod geometry;

// ============================================================================
// Drawing Pipeline
// ============================================================================

/// Line, triangle and circle rasterization.
pub mod raster;

/// Stroke tessellation into triangles.
pub mod tessellate;

/// Render submission and backends.
pub mod render;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Interaction
// ============================================================================

/// Input events and key bindings.
pub mod input;

/// Interactive drawing session.
pub mod session;

/// Event script parsing.
pub mod script;

/// YAML configuration.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-sketch operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_sketch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Color, Palette, Rgba};
    pub use crate::config::SketchConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{PixelRect, Point};
    pub use crate::input::{InputEvent, InputHandler, KeyBindings};
    pub use crate::output::PngEncoder;
    pub use crate::raster::{circle, line, triangle, Shape};
    pub use crate::render::{DrawBatch, RecordingBackend, RenderBackend, SoftwareBackend};
    pub use crate::session::{Exercise, Mode, Outcome, Session};
    pub use crate::tessellate::{tessellate, Stroke, Thickness};
}

// ============================================================================
// Tests
// ============================================================================
