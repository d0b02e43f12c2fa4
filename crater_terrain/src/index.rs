// Copyright 2025 the Crater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial index over outline segments.

use alloc::vec::Vec;

use crater_index::{Aabb2D, QuadTreeF64};
use kurbo::{Line, Point, Rect};

use crate::outline::{Outline, SegmentRef};

/// A segment as stored in a [`SegmentIndex`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IndexedSegment {
    /// The segment geometry at build time.
    pub line: Line,
    /// Where the segment lives in the outline it was built from.
    pub at: SegmentRef,
}

/// Quadrant tree over the segments of an [`Outline`].
///
/// Each segment is filed under its start point and carries the bounding box
/// of both endpoints. The index is a snapshot: it is rebuilt wholesale after
/// every outline edit and never patched, so a stored [`SegmentRef`] is valid
/// for exactly the outline it was built from.
#[derive(Debug)]
pub struct SegmentIndex {
    tree: QuadTreeF64<IndexedSegment>,
}

impl SegmentIndex {
    /// Index every segment of `outline` over `bounds`.
    pub fn build(outline: &Outline, bounds: Rect, capacity: usize, max_depth: usize) -> Self {
        let bounds = bounds.abs();
        let mut tree = QuadTreeF64::with_limits(to_aabb(bounds), capacity, max_depth);
        for (at, line) in outline.iter() {
            let bbox = Aabb2D::from_points(line.p0.x, line.p0.y, line.p1.x, line.p1.y);
            tree.insert(line.p0.x, line.p0.y, bbox, IndexedSegment { line, at });
        }
        Self { tree }
    }

    /// Segments whose bounding box intersects `rect`.
    pub fn query_rect(&self, rect: Rect) -> Vec<IndexedSegment> {
        self.tree.query_rect(to_aabb(rect.abs())).collect()
    }

    /// Segments whose bounding box intersects the disk at `center`.
    pub fn query_circle(&self, center: Point, radius: f64) -> Vec<IndexedSegment> {
        self.tree.query_circle(center.x, center.y, radius).collect()
    }

    /// Segments whose bounding box contains `p`.
    pub fn query_point(&self, p: Point) -> Vec<IndexedSegment> {
        self.tree.query_point(p.x, p.y).collect()
    }

    /// Number of indexed segments.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// True if nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Number of tree nodes.
    pub fn node_count(&self) -> usize {
        self.tree.node_count()
    }

    /// Depth of the deepest node.
    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    /// Root region of the tree.
    pub fn bounds(&self) -> Rect {
        let b = self.tree.bounds();
        Rect::new(b.min_x, b.min_y, b.max_x, b.max_y)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.tree.clear();
    }
}

fn to_aabb(r: Rect) -> Aabb2D<f64> {
    Aabb2D::new(r.x0, r.y0, r.x1, r.y1)
}
