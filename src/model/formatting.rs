//! Resolved paragraph formatting: alignment and run color.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Horizontal paragraph alignment.
///
/// A closed three-way mapping: the source format's marker values `center`
/// and `right` map to their variants, every other value (or no marker at
/// all) resolves to `Left`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
}

/// An RGB text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Default text color.
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    /// Parse a `#RRGGBB` hex string.
    ///
    /// The value must be exactly seven characters: a `#` prefix followed
    /// by six hex digits. Anything else is rejected so the caller can
    /// fall back to [`Color::BLACK`].
    pub fn parse_hex(value: &str) -> Result<Color, ColorParseError> {
        // Byte-indexed slicing below requires one byte per character
        if !value.is_ascii() {
            return Err(ColorParseError::NotAscii);
        }
        if value.len() != 7 {
            return Err(ColorParseError::WrongLength(value.len()));
        }
        let hex = value
            .strip_prefix('#')
            .ok_or(ColorParseError::MissingPrefix)?;
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color { r, g, b })
    }

    /// Color components scaled to the 0.0..=1.0 range used by PDF
    /// graphics operators.
    pub fn to_rgb_f32(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Why a color marker value failed to parse.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected 7 characters, got {0}")]
    WrongLength(usize),

    #[error("missing '#' prefix")]
    MissingPrefix,

    #[error("non-ASCII character in value")]
    NotAscii,

    #[error("invalid hex digit: {0}")]
    InvalidHex(#[from] std::num::ParseIntError),
}

/// Formatting resolved for one paragraph.
///
/// Resolution is per paragraph, not per run: the first run-level color
/// marker found in the paragraph colors the whole line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunFormatting {
    /// Horizontal alignment (default left)
    pub alignment: Alignment,

    /// Text color (default black)
    pub color: Color,
}
