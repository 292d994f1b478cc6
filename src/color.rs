//! Color types and the indexed stroke palette.
//!
//! Strokes carry a floating-point [`Color`] with channels in `[0, 1]`, the
//! representation a GPU uniform expects. Framebuffers store 8-bit [`Rgba`]
//! pixels. The ten selectable stroke colors live in [`Palette`].

use std::fmt;

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

/// RGBA color with floating-point channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel (1.0 = fully opaque).
    pub a: f32,
}

impl Color {
    /// Opaque white, the background every frame is cleared to.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Create a new color.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a `[r, g, b, a]` array.
    #[must_use]
    pub const fn from_array(arr: [f32; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Convert to `[r, g, b, a]`, the layout of a `vec4` uniform.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns `true` when every channel lies within `[0, 1]`.
    #[must_use]
    pub fn is_normalized(self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// Quantize to 8 bits per channel, clamping out-of-range channels.
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba::new(q(self.r), q(self.g), q(self.b), q(self.a))
    }
}

impl From<Palette> for Color {
    fn from(palette: Palette) -> Self {
        palette.color()
    }
}

/// The ten indexed stroke colors, selected with the digit keys 0-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    /// 0: red.
    Red,
    /// 1: green.
    Green,
    /// 2: blue.
    Blue,
    /// 3: yellow.
    Yellow,
    /// 4: magenta.
    Magenta,
    /// 5: cyan.
    Cyan,
    /// 6: black.
    Black,
    /// 7: white (invisible on the default background).
    White,
    /// 8: orange.
    Orange,
    /// 9: purple.
    Purple,
}

impl Palette {
    /// Every entry, in index order.
    pub const ALL: [Self; 10] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Magenta,
        Self::Cyan,
        Self::Black,
        Self::White,
        Self::Orange,
        Self::Purple,
    ];

    /// Look up a palette entry by index, `None` outside `0..=9`.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// The index this entry is selected with.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The stroke color of this entry.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Red => Color::new(1.0, 0.0, 0.0, 1.0),
            Self::Green => Color::new(0.0, 1.0, 0.0, 1.0),
            Self::Blue => Color::new(0.0, 0.0, 1.0, 1.0),
            Self::Yellow => Color::new(1.0, 1.0, 0.0, 1.0),
            Self::Magenta => Color::new(1.0, 0.0, 1.0, 1.0),
            Self::Cyan => Color::new(0.0, 1.0, 1.0, 1.0),
            Self::Black => Color::new(0.0, 0.0, 0.0, 1.0),
            Self::White => Color::new(1.0, 1.0, 1.0, 1.0),
            Self::Orange => Color::new(1.0, 0.5, 0.0, 1.0),
            Self::Purple => Color::new(0.5, 0.0, 1.0, 1.0),
        }
    }
}

impl TryFrom<u8> for Palette {
    type Error = u8;

    fn try_from(index: u8) -> std::result::Result<Self, Self::Error> {
        Self::from_index(index).ok_or(index)
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::Black => "black",
            Self::White => "white",
            Self::Orange => "orange",
            Self::Purple => "purple",
        };
        f.write_str(name)
    }
}
