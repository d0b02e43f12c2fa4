// Copyright 2025 the Crater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam to whatever puts the terrain on screen.

use kurbo::Affine;

use crate::color::BorderStyle;
use crate::pixels::PixelField;

/// Draws a terrain's pixel field.
///
/// Renderers get shared access only; they never see the outline or the
/// index, and cannot edit the field.
pub trait TerrainRenderer {
    /// Draw `pixels` through `camera` at `scale`.
    fn draw(&mut self, pixels: &PixelField, border: &BorderStyle, camera: Affine, scale: f64);
}

impl<R: TerrainRenderer + ?Sized> TerrainRenderer for &mut R {
    fn draw(&mut self, pixels: &PixelField, border: &BorderStyle, camera: Affine, scale: f64) {
        (**self).draw(pixels, border, camera, scale);
    }
}
