// Copyright 2025 the Crater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The RGBA pixel field behind the terrain.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

use crate::color::Rgba8;
use crate::generate::GenerateError;

/// A `width × height` RGBA8 buffer.
///
/// Only alpha is load-bearing for gameplay: a pixel is *solid* iff its alpha
/// is non-zero. Every accessor treats coordinates outside the field as empty
/// (reads) or as a no-op (writes); none of them panic.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelField {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelField {
    /// A fully transparent field.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgba8::TRANSPARENT)
    }

    /// A field where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> Self {
        let n = width as usize * height as usize;
        let mut data = vec![0; n * 4];
        for px in data.chunks_exact_mut(4) {
            px.copy_from_slice(&color.to_array());
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap an existing RGBA8 buffer. Its length must be `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, GenerateError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(GenerateError::BufferSize {
                expected,
                found: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The field as a rectangle in field space.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Byte offset of pixel `(x, y)`, or `None` outside the field.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Both coordinates are bounds-checked against u32 dimensions first."
    )]
    pub fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some((x as usize + y as usize * self.width as usize) * 4)
    }

    /// The pixel at `(x, y)`, or `None` outside the field.
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgba8> {
        let i = self.index_of(x, y)?;
        Some(Rgba8::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ))
    }

    /// Overwrite the pixel at `(x, y)`. Returns `false` outside the field.
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Rgba8) -> bool {
        let Some(i) = self.index_of(x, y) else {
            return false;
        };
        self.data[i..i + 4].copy_from_slice(&color.to_array());
        true
    }

    /// Alpha at `(x, y)`; zero outside the field.
    pub fn alpha(&self, x: i64, y: i64) -> u8 {
        self.index_of(x, y).map_or(0, |i| self.data[i + 3])
    }

    /// Set the alpha at `(x, y)`. Returns `false` outside the field.
    pub fn set_alpha(&mut self, x: i64, y: i64, value: u8) -> bool {
        let Some(i) = self.index_of(x, y) else {
            return false;
        };
        self.data[i + 3] = value;
        true
    }

    /// Whether the pixel containing field-space point `(x, y)` holds terrain.
    ///
    /// Coordinates are floored to the pixel grid. Points outside the field,
    /// and non-finite points, are never solid.
    pub fn solid_at(&self, x: f64, y: f64) -> bool {
        match (pixel_coord(x), pixel_coord(y)) {
            (Some(px), Some(py)) => self.alpha(px, py) != 0,
            _ => false,
        }
    }

    /// Whether the pixel containing `p` holds terrain.
    pub fn solid_at_point(&self, p: Point) -> bool {
        self.solid_at(p.x, p.y)
    }

    /// Number of solid pixels.
    pub fn solid_count(&self) -> usize {
        self.data.chunks_exact(4).filter(|px| px[3] != 0).count()
    }

    /// Take a read-modify-write copy of the whole field.
    ///
    /// Edits made to the copy become visible through [`PixelField::restore`].
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Replace this field with `snapshot`.
    ///
    /// Returns `false`, leaving the field untouched, if the dimensions differ;
    /// a field is never resized after creation.
    pub fn restore(&mut self, snapshot: Self) -> bool {
        if snapshot.width != self.width || snapshot.height != self.height {
            return false;
        }
        self.data = snapshot.data;
        true
    }

    /// Integer pixel ranges covering `rect`, clipped to the field.
    pub fn pixel_span(&self, rect: Rect) -> (Range<i64>, Range<i64>) {
        let clamp_x = |v: f64| clamp_coord(v, self.width);
        let clamp_y = |v: f64| clamp_coord(v, self.height);
        let x0 = clamp_x(rect.x0.floor());
        let x1 = clamp_x(rect.x1.ceil()).max(x0);
        let y0 = clamp_y(rect.y0.floor());
        let y1 = clamp_y(rect.y1.ceil()).max(y0);
        (x0..x1, y0..y1)
    }

    /// Paint a filled disk of `color`, restricted to `clip`.
    ///
    /// A pixel is covered when its center lies strictly inside the disk.
    /// Returns the number of pixels written.
    pub fn fill_disk(&mut self, center: Point, radius: f64, color: Rgba8, clip: Rect) -> usize {
        if radius.is_nan() || radius <= 0.0 {
            return 0;
        }
        let disk = Rect::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        );
        let (xs, ys) = self.pixel_span(disk.intersect(clip));
        let r2 = radius * radius;
        let mut painted = 0;
        for y in ys {
            let dy = y as f64 + 0.5 - center.y;
            for x in xs.clone() {
                let dx = x as f64 + 0.5 - center.x;
                if dx * dx + dy * dy < r2 && self.set_pixel(x, y, color) {
                    painted += 1;
                }
            }
        }
        painted
    }
}

impl core::fmt::Debug for PixelField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PixelField")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish_non_exhaustive()
    }
}

/// Floor a coordinate onto the pixel grid; `None` for NaN or infinities.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Saturating float-to-int cast; out-of-range values land outside the field."
)]
pub(crate) fn pixel_coord(v: f64) -> Option<i64> {
    if !v.is_finite() {
        return None;
    }
    Some(v.floor() as i64)
}

fn clamp_coord(v: f64, limit: u32) -> i64 {
    if v.is_nan() {
        return 0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Clamped to [0, limit] before the cast."
    )]
    let c = v.clamp(0.0, f64::from(limit)) as i64;
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solidity_follows_alpha_and_bounds() {
        let mut f = PixelField::filled(4, 3, Rgba8::rgb(10, 20, 30));
        assert!(f.solid_at(0.0, 0.0));
        assert!(f.solid_at(3.9, 2.9));
        assert!(!f.solid_at(4.0, 0.0), "x == width is outside");
        assert!(!f.solid_at(-0.1, 1.0), "negative coords floor outside");
        assert!(!f.solid_at(f64::NAN, 1.0));
        assert!(f.set_alpha(2, 1, 0));
        assert!(!f.solid_at(2.5, 1.5));
        assert!(!f.set_alpha(9, 9, 0));
        assert_eq!(f.solid_count(), 11);
    }

    #[test]
    fn from_rgba_checks_length() {
        assert!(PixelField::from_rgba(2, 2, vec![0; 16]).is_ok());
        assert_eq!(
            PixelField::from_rgba(2, 2, vec![0; 15]),
            Err(GenerateError::BufferSize {
                expected: 16,
                found: 15
            })
        );
    }

    #[test]
    fn snapshot_edits_commit_on_restore() {
        let mut f = PixelField::filled(8, 8, Rgba8::rgb(1, 2, 3));
        let mut scratch = f.snapshot();
        scratch.set_alpha(4, 4, 0);
        assert!(f.solid_at(4.0, 4.0), "snapshot edits are private");
        assert!(f.restore(scratch));
        assert!(!f.solid_at(4.0, 4.0));
    }

    #[test]
    fn disk_covers_pixel_centers_inside_radius() {
        let mut f = PixelField::new(20, 20);
        let red = Rgba8::rgb(255, 0, 0);
        let n = f.fill_disk(Point::new(10.0, 10.0), 3.0, red, f.bounds());
        // Pixel centers at distance < 3 from (10, 10): offsets (±0.5, ±0.5) .. (±2.5, ±0.5) etc.
        assert_eq!(n, 32);
        assert_eq!(f.pixel(9, 9), Some(red));
        assert_eq!(f.pixel(12, 10), Some(red));
        assert_eq!(f.pixel(13, 10), Some(Rgba8::TRANSPARENT));
    }

    #[test]
    fn disk_is_clipped_to_field_and_clip_rect() {
        let mut f = PixelField::new(10, 10);
        let c = Rgba8::rgb(0, 0, 255);
        let n = f.fill_disk(Point::new(0.0, 0.0), 4.0, c, f.bounds());
        assert!(n > 0);
        assert_eq!(f.pixel(-1, 0), None);
        let before = f.clone();
        let none = f.fill_disk(Point::new(5.0, 5.0), 3.0, c, Rect::new(20.0, 20.0, 30.0, 30.0));
        assert_eq!(none, 0);
        assert_eq!(f, before);
    }
}
