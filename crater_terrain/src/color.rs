// Copyright 2025 the Crater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel colors and the crater border style.

use core::fmt;

/// An 8-bit RGBA color, the unit of a [`PixelField`](crate::PixelField).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha. Zero means the pixel holds no terrain.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Create a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse a CSS-style hex color: `#rgb`, `#rrggbb` or `#rrggbbaa`.
    ///
    /// The leading `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let nibble = |c: u8| -> Result<u8, ParseColorError> {
            match c {
                b'0'..=b'9' => Ok(c - b'0'),
                b'a'..=b'f' => Ok(c - b'a' + 10),
                b'A'..=b'F' => Ok(c - b'A' + 10),
                _ => Err(ParseColorError::InvalidDigit(c as char)),
            }
        };
        let bytes = digits.as_bytes();
        let byte = |i: usize| -> Result<u8, ParseColorError> {
            Ok(nibble(bytes[i])? << 4 | nibble(bytes[i + 1])?)
        };
        match bytes.len() {
            3 => {
                let r = nibble(bytes[0])?;
                let g = nibble(bytes[1])?;
                let b = nibble(bytes[2])?;
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            n => Err(ParseColorError::InvalidLength(n)),
        }
    }

    /// The color as `[r, g, b, a]`.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Error returned by [`Rgba8::from_hex`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseColorError {
    /// The digit count was not 3, 6 or 8.
    InvalidLength(usize),
    /// A character outside `[0-9a-fA-F]`.
    InvalidDigit(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(n) => {
                write!(f, "hex color must have 3, 6 or 8 digits, found {n}")
            }
            Self::InvalidDigit(c) => write!(f, "invalid hex digit {c:?} in color"),
        }
    }
}

impl core::error::Error for ParseColorError {}

/// The ring painted just outside every crater.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BorderStyle {
    /// Ring color.
    pub color: Rgba8,
    /// Ring width in pixels. Negative values are treated as zero.
    pub thickness: f64,
}

impl BorderStyle {
    /// Create a border style.
    pub const fn new(color: Rgba8, thickness: f64) -> Self {
        Self { color, thickness }
    }
}

impl Default for BorderStyle {
    /// `#555555`, ten pixels wide.
    fn default() -> Self {
        Self {
            color: Rgba8::rgb(0x55, 0x55, 0x55),
            thickness: 10.0,
        }
    }
}
