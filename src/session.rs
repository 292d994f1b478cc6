//! Interactive drawing session.
//!
//! A [`Session`] owns the drawing state (mode, color, thickness and the pending
//! clicks) together with its [`RenderBackend`]. Events are handled one at a
//! time and synchronously: a click that completes a shape rasterizes,
//! tessellates and submits it before the handler returns.
//!
//! Only the most recently completed stroke is ever visible. Every submission
//! clears the frame, and no stroke history is kept.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::color::{Color, Palette};
use crate::config::SketchConfig;
use crate::geometry::Point;
use crate::input::InputEvent;
use crate::raster::Shape;
use crate::render::{DrawBatch, RenderBackend};
use crate::tessellate::{Stroke, Thickness};

// ============================================================================
// Mode
// ============================================================================

/// What the session does with the next input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Two clicks draw a line segment.
    DrawLine,
    /// Three clicks draw a triangle outline.
    DrawTriangle,
    /// Two clicks draw a circle: center, then a point on the circumference.
    DrawCircle,
    /// Digits 0-9 pick a palette color.
    SelectColor,
    /// Digits 1-9 pick the stroke thickness.
    SelectThickness,
}

impl Mode {
    /// Clicks needed to complete a shape; zero for the selection modes.
    #[must_use]
    pub const fn quota(self) -> usize {
        match self {
            Self::DrawLine | Self::DrawCircle => 2,
            Self::DrawTriangle => 3,
            Self::SelectColor | Self::SelectThickness => 0,
        }
    }

    /// Returns `true` for modes that accept clicks.
    #[must_use]
    pub const fn is_drawing(self) -> bool {
        self.quota() > 0
    }

    /// Build the shape for a full click buffer.
    ///
    /// Returns `None` unless exactly [`quota`](Self::quota) clicks are given.
    #[must_use]
    pub fn shape(self, clicks: &[Point]) -> Option<Shape> {
        match (self, clicks) {
            (Self::DrawLine, &[from, to]) => Some(Shape::Line { from, to }),
            (Self::DrawTriangle, &[a, b, c]) => Some(Shape::Triangle([a, b, c])),
            (Self::DrawCircle, &[center, edge]) => Some(Shape::circle_through(center, edge)),
            _ => None,
        }
    }

    /// Human-readable label shown in the status line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DrawLine => "Draw line",
            Self::DrawTriangle => "Draw triangle",
            Self::DrawCircle => "Draw circle",
            Self::SelectColor => "Change color (0-9)",
            Self::SelectThickness => "Change thickness (1-9)",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Exercise
// ============================================================================

/// Session profile: which modes are offered and the starting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exercise {
    /// Lines and triangles with color and thickness selection.
    #[default]
    Lines,
    /// A fixed two-click circle flow with no mode switching.
    Circle,
    /// Every mode.
    Full,
}

impl Exercise {
    /// Modes this profile can enter.
    #[must_use]
    pub const fn modes(self) -> &'static [Mode] {
        match self {
            Self::Lines => &[
                Mode::DrawLine,
                Mode::DrawTriangle,
                Mode::SelectColor,
                Mode::SelectThickness,
            ],
            Self::Circle => &[Mode::DrawCircle],
            Self::Full => &[
                Mode::DrawLine,
                Mode::DrawTriangle,
                Mode::DrawCircle,
                Mode::SelectColor,
                Mode::SelectThickness,
            ],
        }
    }

    /// Returns `true` if `mode` is offered by this profile.
    #[must_use]
    pub fn allows(self, mode: Mode) -> bool {
        self.modes().contains(&mode)
    }

    /// Mode a new session starts in.
    #[must_use]
    pub const fn initial_mode(self) -> Mode {
        match self {
            Self::Lines | Self::Full => Mode::DrawLine,
            Self::Circle => Mode::DrawCircle,
        }
    }

    /// Stroke color a new session starts with.
    #[must_use]
    pub const fn default_color(self) -> Palette {
        match self {
            Self::Lines | Self::Full => Palette::Blue,
            Self::Circle => Palette::Red,
        }
    }

    /// Stroke thickness a new session starts with.
    #[must_use]
    pub const fn default_thickness(self) -> Thickness {
        match self {
            Self::Lines | Self::Full => Thickness::MIN,
            Self::Circle => match Thickness::new(2) {
                Some(t) => t,
                None => Thickness::MIN,
            },
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lines => "lines",
            Self::Circle => "circle",
            Self::Full => "full",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Click buffer
// ============================================================================

/// Pending clicks for the shape being drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickBuffer {
    points: Vec<Point>,
    quota: usize,
}

impl ClickBuffer {
    /// Creates an empty buffer that fills up after `quota` clicks.
    #[must_use]
    pub fn new(quota: usize) -> Self {
        Self {
            points: Vec::with_capacity(quota),
            quota,
        }
    }

    /// Clicks needed to fill the buffer.
    #[must_use]
    pub fn quota(&self) -> usize {
        self.quota
    }

    /// Number of buffered clicks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when no clicks are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Buffered clicks, in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Buffers a click and, when that fills the buffer, drains and returns
    /// every buffered click. Clicks are dropped when the quota is zero.
    pub fn push(&mut self, point: Point) -> Option<Vec<Point>> {
        if self.quota == 0 {
            return None;
        }
        self.points.push(point);
        (self.points.len() >= self.quota).then(|| std::mem::take(&mut self.points))
    }

    /// Discards every buffered click and sets a new quota.
    pub fn reset(&mut self, quota: usize) {
        self.points.clear();
        self.quota = quota;
    }
}

// ============================================================================
// Session
// ============================================================================

/// What handling one event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The event does not apply in the current state.
    Ignored,
    /// The mode changed and pending clicks were discarded.
    ModeChanged(Mode),
    /// A palette color was selected.
    ColorChanged(Palette),
    /// A thickness was selected.
    ThicknessChanged(Thickness),
    /// A click was buffered; the shape is not complete yet.
    PointBuffered {
        /// Clicks buffered so far.
        pending: usize,
        /// Clicks needed to complete the shape.
        quota: usize,
    },
    /// A shape was completed and submitted to the backend.
    StrokeRendered {
        /// The completed shape.
        shape: Shape,
        /// Number of rasterized points.
        points: usize,
        /// Number of submitted vertices.
        vertices: usize,
    },
}

/// Interactive drawing session.
#[derive(Debug)]
pub struct Session<B> {
    exercise: Exercise,
    mode: Mode,
    color: Color,
    thickness: Thickness,
    clicks: ClickBuffer,
    backend: B,
    strokes: u64,
}

impl<B: RenderBackend> Session<B> {
    /// Creates a session with the profile's starting mode, color and thickness.
    ///
    /// Nothing is submitted until [`start`](Self::start) or the first
    /// completed stroke.
    #[must_use]
    pub fn new(exercise: Exercise, backend: B) -> Self {
        let mode = exercise.initial_mode();
        Self {
            exercise,
            mode,
            color: exercise.default_color().color(),
            thickness: exercise.default_thickness(),
            clicks: ClickBuffer::new(mode.quota()),
            backend,
            strokes: 0,
        }
    }

    /// Creates a session from configuration.
    #[must_use]
    pub fn from_config(config: &SketchConfig, backend: B) -> Self {
        Self::new(config.exercise, backend)
            .with_color(config.initial_color())
            .with_thickness(config.initial_thickness())
    }

    /// Overrides the starting color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Overrides the starting thickness.
    #[must_use]
    pub fn with_thickness(mut self, thickness: Thickness) -> Self {
        self.thickness = thickness;
        self
    }

    /// Submits the initial frame.
    ///
    /// Profiles with line drawing render a single dot at the origin; the circle
    /// profile submits an empty frame.
    pub fn start(&mut self) {
        let batch = match self.exercise {
            Exercise::Lines | Exercise::Full => {
                let origin = Shape::Line {
                    from: Point::ORIGIN,
                    to: Point::ORIGIN,
                };
                Stroke::from_shape(&origin, self.color, self.thickness).tessellate()
            }
            Exercise::Circle => DrawBatch::new(self.color),
        };
        self.backend.submit(&batch);
        debug!(exercise = %self.exercise, vertices = batch.vertex_count(), "initial frame submitted");
    }

    /// Handles one input event.
    pub fn handle(&mut self, event: InputEvent) -> Outcome {
        match event {
            InputEvent::PointerDown(point) => self.click(point),
            InputEvent::SelectMode(mode) => self.select_mode(mode),
            InputEvent::Digit(digit) => self.digit(digit),
        }
    }

    /// Handles every event in order, returning the number of strokes rendered.
    pub fn run<I>(&mut self, events: I) -> usize
    where
        I: IntoIterator<Item = InputEvent>,
    {
        events
            .into_iter()
            .map(|event| self.handle(event))
            .filter(|outcome| matches!(outcome, Outcome::StrokeRendered { .. }))
            .count()
    }

    /// Switches mode and discards pending clicks.
    ///
    /// Modes the profile does not offer are ignored.
    pub fn select_mode(&mut self, mode: Mode) -> Outcome {
        if !self.exercise.allows(mode) {
            debug!(%mode, exercise = %self.exercise, "mode not available, ignored");
            return Outcome::Ignored;
        }

        self.mode = mode;
        self.clicks.reset(mode.quota());
        info!(%mode, "mode changed");
        Outcome::ModeChanged(mode)
    }

    /// Applies a digit in the color or thickness selection modes.
    ///
    /// Out-of-range digits and digits in other modes are ignored.
    pub fn digit(&mut self, digit: u8) -> Outcome {
        match self.mode {
            Mode::SelectColor => match Palette::from_index(digit) {
                Some(palette) => {
                    self.color = palette.color();
                    info!(index = digit, color = %palette, "color changed");
                    Outcome::ColorChanged(palette)
                }
                None => self.ignore_digit(digit),
            },
            Mode::SelectThickness => match Thickness::new(digit) {
                Some(thickness) => {
                    self.thickness = thickness;
                    info!(%thickness, "thickness changed");
                    Outcome::ThicknessChanged(thickness)
                }
                None => self.ignore_digit(digit),
            },
            _ => self.ignore_digit(digit),
        }
    }

    fn ignore_digit(&self, digit: u8) -> Outcome {
        debug!(digit, mode = %self.mode, "digit ignored");
        Outcome::Ignored
    }

    /// Buffers a click in the drawing modes; the click that reaches the
    /// mode's quota renders the shape and empties the buffer.
    pub fn click(&mut self, point: Point) -> Outcome {
        if !self.mode.is_drawing() {
            debug!(%point, mode = %self.mode, "click ignored");
            return Outcome::Ignored;
        }

        let Some(clicks) = self.clicks.push(point) else {
            trace!(%point, pending = self.clicks.len(), quota = self.clicks.quota(), "click buffered");
            return Outcome::PointBuffered {
                pending: self.clicks.len(),
                quota: self.clicks.quota(),
            };
        };

        match self.mode.shape(&clicks) {
            Some(shape) => self.render(shape),
            None => Outcome::Ignored,
        }
    }

    fn render(&mut self, shape: Shape) -> Outcome {
        let stroke = Stroke::from_shape(&shape, self.color, self.thickness);
        let batch = stroke.tessellate();
        self.backend.submit(&batch);
        self.strokes += 1;

        debug!(
            shape = shape.kind(),
            points = stroke.points.len(),
            vertices = batch.vertex_count(),
            thickness = %stroke.thickness,
            "stroke rendered"
        );

        Outcome::StrokeRendered {
            shape,
            points: stroke.points.len(),
            vertices: batch.vertex_count(),
        }
    }

    /// Status line describing what the session waits for.
    #[must_use]
    pub fn status(&self) -> String {
        match self.exercise {
            Exercise::Circle if self.clicks.is_empty() => {
                "Awaiting first click (center)".to_string()
            }
            Exercise::Circle => "Awaiting second click (radius)".to_string(),
            Exercise::Lines | Exercise::Full => self.mode.label().to_string(),
        }
    }
}

impl<B> Session<B> {
    /// The session profile.
    #[must_use]
    pub fn exercise(&self) -> Exercise {
        self.exercise
    }

    /// The current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Color applied to the next stroke.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Thickness applied to the next stroke.
    #[must_use]
    pub fn thickness(&self) -> Thickness {
        self.thickness
    }

    /// Clicks buffered for the shape in progress.
    #[must_use]
    pub fn pending(&self) -> &[Point] {
        self.clicks.points()
    }

    /// Number of strokes rendered so far.
    #[must_use]
    pub fn strokes_rendered(&self) -> u64 {
        self.strokes
    }

    /// The render backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consume the session, returning its backend.
    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }
}

// ============================================================================
// Tests
// ============================================================================
