// Copyright 2025 the Crater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The terrain: pixel field, outline and segment index kept in lockstep.

use alloc::vec::Vec;

use kurbo::{Affine, Point};
use log::trace;

use crate::color::BorderStyle;
use crate::generate::{self, GenerateError, GeneratedTerrain, GenerationRequest, TerrainGenerator};
use crate::index::SegmentIndex;
use crate::outline::Outline;
use crate::pixels::PixelField;
use crate::render::TerrainRenderer;
use crate::types::TerrainConfig;

/// A destructible terrain.
///
/// The pixel field decides what is solid; the outline traces its boundary
/// and the segment index accelerates lookups into the outline. Every
/// mutation goes through `&mut self` and leaves all three consistent before
/// it returns.
pub struct Terrain {
    pub(crate) pixels: PixelField,
    pub(crate) outline: Outline,
    pub(crate) index: SegmentIndex,
    pub(crate) border: BorderStyle,
    pub(crate) spawn_points: Vec<Point>,
    pub(crate) config: TerrainConfig,
}

impl Terrain {
    /// Assemble a terrain from its parts and index the outline.
    pub fn new(
        pixels: PixelField,
        outline: Outline,
        border: BorderStyle,
        config: TerrainConfig,
    ) -> Self {
        let index = SegmentIndex::build(
            &outline,
            pixels.bounds(),
            config.index_capacity,
            config.index_max_depth,
        );
        let terrain = Self {
            pixels,
            outline,
            index,
            border,
            spawn_points: Vec::new(),
            config,
        };
        terrain.trace_index();
        terrain
    }

    /// Run `generator` once and build a terrain from what it produces.
    ///
    /// The generated field must be non-empty and match the requested size.
    pub fn generate<G>(
        generator: &mut G,
        request: &GenerationRequest,
        config: TerrainConfig,
    ) -> Result<Self, GenerateError>
    where
        G: TerrainGenerator + ?Sized,
        G::Error: Into<GenerateError>,
    {
        let generated = generator.generate(request).map_err(Into::into)?;
        generate::validate(&generated, request)?;
        let GeneratedTerrain {
            pixels,
            spawn_points,
            outline,
        } = generated;
        let mut terrain = Self::new(pixels, outline, request.border, config);
        terrain.spawn_points = spawn_points;
        Ok(terrain)
    }

    /// The pixel field.
    pub fn pixels(&self) -> &PixelField {
        &self.pixels
    }

    /// The outline.
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// The segment index over the current outline.
    pub fn index(&self) -> &SegmentIndex {
        &self.index
    }

    /// The crater border style.
    pub fn border(&self) -> &BorderStyle {
        &self.border
    }

    /// Spawn points chosen at generation time.
    pub fn spawn_points(&self) -> &[Point] {
        &self.spawn_points
    }

    /// The tuning knobs in effect.
    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Whether the pixel containing `(x, y)` holds terrain.
    pub fn solid_at(&self, x: f64, y: f64) -> bool {
        self.pixels.solid_at(x, y)
    }

    /// Rebuild the segment index from the current outline with a new leaf capacity.
    pub fn build_spatial_index(&mut self, capacity: usize) {
        self.config.index_capacity = capacity;
        self.rebuild_index();
    }

    /// Hand the pixel field to `renderer`.
    pub fn draw<R: TerrainRenderer + ?Sized>(&self, renderer: &mut R, camera: Affine, scale: f64) {
        renderer.draw(&self.pixels, &self.border, camera, scale);
    }

    pub(crate) fn rebuild_index(&mut self) {
        self.index = SegmentIndex::build(
            &self.outline,
            self.pixels.bounds(),
            self.config.index_capacity,
            self.config.index_max_depth,
        );
        self.trace_index();
    }

    fn trace_index(&self) {
        trace!(
            "segment index rebuilt: {} segments, {} nodes, depth {}",
            self.index.len(),
            self.index.node_count(),
            self.index.depth()
        );
    }
}

impl core::fmt::Debug for Terrain {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Terrain")
            .field("pixels", &self.pixels)
            .field("polygons", &self.outline.polygon_count())
            .field("segments", &self.outline.segment_count())
            .field("index", &self.index)
            .field("border", &self.border)
            .field("spawn_points", &self.spawn_points.len())
            .finish_non_exhaustive()
    }
}
