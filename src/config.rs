//! Configuration for drawing sessions.
//!
//! Configuration is YAML with a default for every field:
//!
//! ```yaml
//! canvas: { width: 800, height: 600 }
//! background: [1.0, 1.0, 1.0, 1.0]
//! exercise: lines        # lines | circle | full
//! color: 2               # palette index, or [r, g, b, a]
//! thickness: 1
//! keys: { line: r, triangle: t, circle: c, color: k, thickness: e }
//! ```

use crate::color::{Color, Palette};
use crate::error::{Error, Result};
use crate::input::KeyBindings;
use crate::session::Exercise;
use crate::tessellate::Thickness;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    600
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Starting stroke color: a palette index or explicit channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSetting {
    /// Palette index, 0-9.
    Index(u8),
    /// `[r, g, b, a]` channels in `[0, 1]`.
    Rgba([f32; 4]),
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchConfig {
    /// Canvas size.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Color every frame is cleared to.
    #[serde(default = "default_background")]
    pub background: [f32; 4],

    /// Session profile.
    #[serde(default)]
    pub exercise: Exercise,

    /// Starting color; the profile's default when omitted.
    #[serde(default)]
    pub color: Option<ColorSetting>,

    /// Starting thickness (1-9); the profile's default when omitted.
    #[serde(default)]
    pub thickness: Option<u8>,

    /// Mode selection keys.
    #[serde(default)]
    pub keys: KeyBindings,
}

fn default_background() -> [f32; 4] {
    Color::WHITE.to_array()
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            background: default_background(),
            exercise: Exercise::default(),
            color: None,
            thickness: None,
            keys: KeyBindings::default(),
        }
    }
}

impl SketchConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or
    /// [`Error::ConfigInvalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Checks every value against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(Error::config_invalid(
                "canvas",
                format!(
                    "dimensions must be non-zero, got {}x{}",
                    self.canvas.width, self.canvas.height
                ),
            ));
        }

        if !Color::from_array(self.background).is_normalized() {
            return Err(Error::config_invalid(
                "background",
                "channels must be within [0, 1]",
            ));
        }

        match self.color {
            Some(ColorSetting::Index(i)) if Palette::from_index(i).is_none() => {
                return Err(Error::config_invalid(
                    "color",
                    format!("palette index must be between 0 and 9, got {i}"),
                ));
            }
            Some(ColorSetting::Rgba(c)) if !Color::from_array(c).is_normalized() => {
                return Err(Error::config_invalid(
                    "color",
                    "channels must be within [0, 1]",
                ));
            }
            _ => {}
        }

        if let Some(t) = self.thickness {
            if Thickness::new(t).is_none() {
                return Err(Error::config_invalid(
                    "thickness",
                    format!("must be between 1 and 9, got {t}"),
                ));
            }
        }

        if let Some(key) = self.keys.conflict() {
            return Err(Error::config_invalid(
                "keys",
                format!("'{key}' is bound twice or is a digit"),
            ));
        }

        Ok(())
    }

    /// Background color.
    #[must_use]
    pub fn background_color(&self) -> Color {
        Color::from_array(self.background)
    }

    /// Starting stroke color, falling back to the profile default.
    #[must_use]
    pub fn initial_color(&self) -> Color {
        match self.color {
            Some(ColorSetting::Index(i)) => Palette::from_index(i)
                .unwrap_or_else(|| self.exercise.default_color())
                .color(),
            Some(ColorSetting::Rgba(c)) => Color::from_array(c),
            None => self.exercise.default_color().color(),
        }
    }

    /// Starting stroke thickness, falling back to the profile default.
    #[must_use]
    pub fn initial_thickness(&self) -> Thickness {
        self.thickness
            .and_then(Thickness::new)
            .unwrap_or_else(|| self.exercise.default_thickness())
    }
}
