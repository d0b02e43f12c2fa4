// Copyright 2025 the Crater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam to whatever produces the initial terrain.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Size};

use crate::color::BorderStyle;
use crate::outline::Outline;
use crate::pixels::PixelField;

/// Parameters handed to a [`TerrainGenerator`].
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRequest {
    /// Field width in pixels.
    pub width: u32,
    /// Field height in pixels.
    pub height: u32,
    /// Reference to the shape mask asset.
    pub mask: String,
    /// Reference to the ground texture asset.
    pub texture: String,
    /// Crater border style for the session.
    pub border: BorderStyle,
    /// How many spawn points to pick.
    pub character_count: usize,
    /// Footprint each spawn point must leave room for.
    pub character_size: Size,
    /// Spacing between outline vertices when tracing the mask.
    pub path_distance: f64,
}

impl GenerationRequest {
    /// A request for a `width × height` field with the stock assets and defaults.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            mask: String::from("/content/terrain/mask/type-3.png"),
            texture: String::from("/content/terrain/texture/ground.png"),
            border: BorderStyle::default(),
            character_count: 8,
            character_size: Size::new(50.0, 80.0),
            path_distance: 10.0,
        }
    }
}

/// The three things a generator produces in one shot.
#[derive(Clone, Debug)]
pub struct GeneratedTerrain {
    /// The initial pixel field.
    pub pixels: PixelField,
    /// Where characters may spawn.
    pub spawn_points: Vec<Point>,
    /// The initial outline of the solid region.
    pub outline: Outline,
}

/// Produces the initial pixel field, spawn points and outline.
///
/// Generation runs once per level, before the first explosion.
pub trait TerrainGenerator {
    /// Error reported by this generator.
    type Error;

    /// Build a terrain for `request`.
    fn generate(&mut self, request: &GenerationRequest) -> Result<GeneratedTerrain, Self::Error>;
}

/// Error returned when generated terrain cannot be used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// An RGBA buffer did not hold exactly `width * height * 4` bytes.
    BufferSize {
        /// Required length.
        expected: usize,
        /// Actual length.
        found: usize,
    },
    /// The field has no pixels.
    EmptyField,
    /// The field does not have the requested dimensions.
    SizeMismatch {
        /// Requested `(width, height)`.
        expected: (u32, u32),
        /// Produced `(width, height)`.
        found: (u32, u32),
    },
    /// The generator itself failed.
    Generator(String),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferSize { expected, found } => write!(
                f,
                "pixel buffer holds {found} bytes, expected {expected}"
            ),
            Self::EmptyField => f.write_str("terrain field has no pixels"),
            Self::SizeMismatch { expected, found } => write!(
                f,
                "generated field is {}x{}, requested {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            Self::Generator(msg) => write!(f, "terrain generator failed: {msg}"),
        }
    }
}

impl core::error::Error for GenerateError {}

/// Check a generated terrain against its request.
pub(crate) fn validate(
    terrain: &GeneratedTerrain,
    request: &GenerationRequest,
) -> Result<(), GenerateError> {
    let found = (terrain.pixels.width(), terrain.pixels.height());
    if found.0 == 0 || found.1 == 0 {
        return Err(GenerateError::EmptyField);
    }
    let expected = (request.width, request.height);
    if found != expected {
        return Err(GenerateError::SizeMismatch { expected, found });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn flat(width: u32, height: u32) -> GeneratedTerrain {
        GeneratedTerrain {
            pixels: PixelField::new(width, height),
            spawn_points: Vec::new(),
            outline: Outline::new(),
        }
    }

    #[test]
    fn request_defaults_match_stock_level() {
        let r = GenerationRequest::new(640, 480);
        assert_eq!(r.character_count, 8);
        assert_eq!(r.character_size, Size::new(50.0, 80.0));
        assert_eq!(r.path_distance, 10.0);
        assert_eq!(r.border, BorderStyle::default());
    }

    #[test]
    fn validation_rejects_empty_and_mismatched_fields() {
        let r = GenerationRequest::new(4, 4);
        assert_eq!(validate(&flat(4, 4), &r), Ok(()));
        assert_eq!(validate(&flat(0, 4), &r), Err(GenerateError::EmptyField));
        let err = validate(&flat(4, 3), &r).unwrap_err();
        assert_eq!(err.to_string(), "generated field is 4x3, requested 4x4");
    }
}
