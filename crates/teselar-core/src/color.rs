//! Color representation and hex parsing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGBA color with components in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Opaque white.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Creates a color, clamping each component to `[0.0, 1.0]`.
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Creates an opaque color.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::Length(digits.len()));
        }
        let channel = |range: std::ops::Range<usize>| -> Result<f32, ColorParseError> {
            let pair = digits
                .get(range)
                .ok_or(ColorParseError::Length(digits.len()))?;
            u8::from_str_radix(pair, 16)
                .map(|byte| f32::from(byte) / 255.0)
                .map_err(|_| ColorParseError::Digit(pair.to_string()))
        };
        let r = channel(0..2)?;
        let g = channel(2..4)?;
        let b = channel(4..6)?;
        let a = if digits.len() == 8 { channel(6..8)? } else { 1.0 };
        Ok(Self { r, g, b, a })
    }

    /// Formats as `#rrggbb`, or `#rrggbbaa` when the color is translucent.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let byte = |c: f32| (c * 255.0).round() as u8;
        if self.a < 1.0 {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                byte(self.r),
                byte(self.g),
                byte(self.b),
                byte(self.a)
            )
        } else {
            format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
        }
    }
}

/// Error parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Hex digit count was not 6 or 8.
    Length(usize),
    /// A channel pair was not valid hexadecimal.
    Digit(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(len) => write!(f, "expected 6 or 8 hex digits, got {len}"),
            Self::Digit(pair) => write!(f, "invalid hex digits '{pair}'"),
        }
    }
}

impl std::error::Error for ColorParseError {}
