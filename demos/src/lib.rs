// Copyright 2025 the Crater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces for the Crater demos: a procedural hill generator and an ASCII renderer.

use crater_terrain::{
    BorderStyle, GenerateError, GeneratedTerrain, GenerationRequest, Outline, PixelField, Rgba8,
    TerrainGenerator, TerrainRenderer,
};
use kurbo::{Affine, Line, Point};

/// Rolling hills: solid below a sum of two sines.
///
/// Stands in for the mask/texture pipeline of a real game; it ignores the
/// asset references in the request.
#[derive(Clone, Debug)]
pub struct Hills {
    /// Base ground height as a fraction of the field height.
    pub level: f64,
    /// Peak-to-trough height of the hills in pixels.
    pub amplitude: f64,
}

impl Default for Hills {
    fn default() -> Self {
        Self {
            level: 0.55,
            amplitude: 12.0,
        }
    }
}

impl Hills {
    fn ground_at(&self, x: f64, height: f64) -> f64 {
        let wave = (x / 23.0).sin() * 0.6 + (x / 9.0).cos() * 0.4;
        (height * self.level + wave * self.amplitude * 0.5).floor()
    }
}

impl TerrainGenerator for Hills {
    type Error = GenerateError;

    fn generate(&mut self, r: &GenerationRequest) -> Result<GeneratedTerrain, GenerateError> {
        if r.width == 0 || r.height == 0 {
            return Err(GenerateError::EmptyField);
        }
        let height = f64::from(r.height);
        let ground = Rgba8::rgb(0x8b, 0x5a, 0x2b);
        let mut pixels = PixelField::new(r.width, r.height);
        for x in 0..i64::from(r.width) {
            let top = self.ground_at(x as f64 + 0.5, height) as i64;
            for y in top.max(0)..i64::from(r.height) {
                pixels.set_pixel(x, y, ground);
            }
        }

        let step = r.path_distance.max(1.0);
        let width = f64::from(r.width);
        let mut surface = Vec::new();
        let mut x = 0.0;
        while x < width {
            let next = (x + step).min(width);
            surface.push(Line::new(
                (x, self.ground_at(x, height)),
                (next, self.ground_at(next, height)),
            ));
            x = next;
        }

        let spacing = width / (r.character_count as f64 + 1.0);
        let spawn_points = (1..=r.character_count)
            .map(|i| {
                let x = spacing * i as f64;
                Point::new(x, self.ground_at(x, height) - r.character_size.height)
            })
            .collect();

        Ok(GeneratedTerrain {
            pixels,
            spawn_points,
            outline: Outline::from_polygons(vec![surface]),
        })
    }
}

/// Renders a terrain as text, one character per `scale × scale` block.
#[derive(Debug, Default)]
pub struct AsciiRenderer {
    /// The last frame drawn.
    pub frame: String,
}

impl TerrainRenderer for AsciiRenderer {
    fn draw(&mut self, pixels: &PixelField, border: &BorderStyle, camera: Affine, scale: f64) {
        let scale = scale.max(1.0);
        let to_field = camera.inverse();
        let cols = (f64::from(pixels.width()) / scale).ceil() as i64;
        let rows = (f64::from(pixels.height()) / scale).ceil() as i64;
        self.frame.clear();
        for row in 0..rows {
            for col in 0..cols {
                let p = to_field * Point::new((col as f64 + 0.5) * scale, (row as f64 + 0.5) * scale);
                let px = pixels.pixel(p.x.floor() as i64, p.y.floor() as i64);
                let c = match px {
                    Some(c) if c.a == 0 => ' ',
                    Some(c) if c == border.color => '+',
                    Some(_) => '#',
                    None => '.',
                };
                self.frame.push(c);
            }
            self.frame.push('\n');
        }
    }
}
