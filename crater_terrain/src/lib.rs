// Copyright 2025 the Crater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crater Terrain: a Kurbo-native destructible 2D terrain.
//!
//! A [`Terrain`] keeps two descriptions of the same ground in lockstep:
//!
//! - a [`PixelField`] of RGBA pixels, where a pixel is solid iff its alpha is non-zero;
//! - an [`Outline`] of polygons made of [`kurbo::Line`] segments tracing the solid region,
//!   mirrored into a [`SegmentIndex`] (a quadrant tree from [`crater_index`]) for range queries.
//!
//! [`Terrain::explode`] carves a circular crater: it clears the pixels inside, paints a
//! border ring outside, cuts the outline at the rim, appends the new rim segments and
//! rebuilds the index. All of that happens inside one `&mut self` call, so no reader ever
//! sees the raster and the outline disagree.
//!
//! ## Where this fits
//!
//! Producing the initial terrain and putting it on screen are left to collaborators:
//!
//! - [`TerrainGenerator`] turns a [`GenerationRequest`] into the initial field, outline and
//!   spawn points once per level.
//! - [`TerrainRenderer`] gets read-only access to the field through [`Terrain::draw`].
//!
//! ## API overview
//!
//! - [`Terrain`]: owns the field, the outline and the index.
//! - [`Force`]: how an explosion's radius is derived.
//! - [`Explosion`]: what an explosion did, including the pixel area to repaint.
//! - [`TerrainConfig`]: index capacity, circle resolution, query margin, scratch marker color.
//! - [`geometry`]: segment intersection and circle approximation.
//!
//! # Example
//!
//! ```rust
//! use crater_terrain::{BorderStyle, Force, Outline, PixelField, Rgba8, Terrain, TerrainConfig};
//! use kurbo::Point;
//!
//! let pixels = PixelField::filled(100, 100, Rgba8::rgb(120, 80, 40));
//! let outline = Outline::rectangle(pixels.bounds(), 10.0);
//! let mut terrain = Terrain::new(pixels, outline, BorderStyle::default(), TerrainConfig::default());
//!
//! let report = terrain.explode(Point::new(50.0, 50.0), Force::Radius(20.0));
//! assert_eq!(report.appended, 12);
//! assert!(!terrain.solid_at(50.0, 50.0));
//! assert!(terrain.solid_at(50.0, 75.0));
//!
//! // The index always mirrors the outline.
//! assert_eq!(terrain.index().len(), terrain.outline().segment_count());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color;
mod explode;
mod generate;
pub mod geometry;
mod index;
mod outline;
mod pixels;
mod render;
mod terrain;
mod types;

pub use color::{BorderStyle, ParseColorError, Rgba8};
pub use explode::Explosion;
pub use generate::{GenerateError, GeneratedTerrain, GenerationRequest, TerrainGenerator};
pub use index::{IndexedSegment, SegmentIndex};
pub use outline::{Outline, SegmentRef};
pub use pixels::PixelField;
pub use render::TerrainRenderer;
pub use terrain::Terrain;
pub use types::{Ends, Force, TerrainConfig};
