//! Input events and key bindings for the drawing session.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::session::Mode;

/// An input event consumed by a [`Session`](crate::session::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer pressed at a pixel coordinate.
    PointerDown(Point),
    /// Switch to a mode.
    SelectMode(Mode),
    /// A decimal digit (0-9), the parameter for the selection modes.
    Digit(u8),
}

impl InputEvent {
    /// Pointer event from fractional coordinates, rounded to the nearest pixel
    /// and clamped to the `i32` range.
    #[must_use]
    pub fn pointer(x: f64, y: f64) -> Self {
        Self::PointerDown(Point::from_f64(x, y))
    }
}

/// Keys that select each mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Draw line mode.
    #[serde(default = "default_line")]
    pub line: char,
    /// Draw triangle mode.
    #[serde(default = "default_triangle")]
    pub triangle: char,
    /// Draw circle mode.
    #[serde(default = "default_circle")]
    pub circle: char,
    /// Color selection mode.
    #[serde(default = "default_color")]
    pub color: char,
    /// Thickness selection mode.
    #[serde(default = "default_thickness")]
    pub thickness: char,
}

fn default_line() -> char {
    'r'
}
fn default_triangle() -> char {
    't'
}
fn default_circle() -> char {
    'c'
}
fn default_color() -> char {
    'k'
}
fn default_thickness() -> char {
    'e'
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            line: default_line(),
            triangle: default_triangle(),
            circle: default_circle(),
            color: default_color(),
            thickness: default_thickness(),
        }
    }
}

impl KeyBindings {
    /// Pairs of (key, mode), lowercased.
    #[must_use]
    pub fn entries(&self) -> [(char, Mode); 5] {
        [
            (self.line.to_ascii_lowercase(), Mode::DrawLine),
            (self.triangle.to_ascii_lowercase(), Mode::DrawTriangle),
            (self.circle.to_ascii_lowercase(), Mode::DrawCircle),
            (self.color.to_ascii_lowercase(), Mode::SelectColor),
            (self.thickness.to_ascii_lowercase(), Mode::SelectThickness),
        ]
    }

    /// Returns the first key bound twice, or bound to a digit.
    #[must_use]
    pub fn conflict(&self) -> Option<char> {
        let entries = self.entries();
        entries.iter().enumerate().find_map(|(i, &(key, _))| {
            let duplicate = entries[..i].iter().any(|&(other, _)| other == key);
            (duplicate || key.is_ascii_digit()).then_some(key)
        })
    }
}

/// Translates key presses into input events.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    bindings: KeyBindings,
}

impl InputHandler {
    /// Creates a handler with the given bindings.
    #[must_use]
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    /// The active bindings.
    #[must_use]
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Handles a key press. Keys are case-insensitive; unbound keys yield
    /// `None`.
    #[must_use]
    pub fn handle_key(&self, key: char) -> Option<InputEvent> {
        if let Some(digit) = key.to_digit(10) {
            return Some(InputEvent::Digit(digit as u8));
        }

        let key = key.to_ascii_lowercase();
        self.bindings
            .entries()
            .into_iter()
            .find(|&(bound, _)| bound == key)
            .map(|(_, mode)| InputEvent::SelectMode(mode))
    }
}
