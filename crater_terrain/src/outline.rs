// Copyright 2025 the Crater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The vector boundary of the solid terrain.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Line, Point, Rect};

/// Position of a segment inside an [`Outline`].
///
/// Addresses are positional: any edit to a polygon's segment list
/// invalidates the addresses into that polygon.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentRef {
    /// Polygon index.
    pub polygon: usize,
    /// Segment index within the polygon.
    pub segment: usize,
}

impl SegmentRef {
    /// Create a segment address.
    pub const fn new(polygon: usize, segment: usize) -> Self {
        Self { polygon, segment }
    }
}

/// An ordered list of polygons, each an ordered list of segments.
///
/// Consecutive segments of a polygon normally share an endpoint. Crater
/// boundaries are appended to the last polygon as they are carved, so a
/// polygon that has been exploded into may hold several chains.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outline {
    polygons: Vec<Vec<Line>>,
}

impl Outline {
    /// An outline with no polygons.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing polygons.
    pub fn from_polygons(polygons: Vec<Vec<Line>>) -> Self {
        Self { polygons }
    }

    /// A closed rectangle, each side subdivided into segments at most `step` long.
    ///
    /// The polygon runs clockwise in y-down space starting at the top-left
    /// corner. A non-positive or non-finite `step` yields one segment per side.
    pub fn rectangle(rect: Rect, step: f64) -> Self {
        let rect = rect.abs();
        let corners = [
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x1, rect.y0),
            Point::new(rect.x1, rect.y1),
            Point::new(rect.x0, rect.y1),
        ];
        let mut polygon = Vec::new();
        for (i, &from) in corners.iter().enumerate() {
            let to = corners[(i + 1) % corners.len()];
            subdivide(Line::new(from, to), step, &mut polygon);
        }
        Self::from_polygons(alloc::vec![polygon])
    }

    /// All polygons.
    pub fn polygons(&self) -> &[Vec<Line>] {
        &self.polygons
    }

    /// Number of polygons.
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Total number of segments across every polygon.
    pub fn segment_count(&self) -> usize {
        self.polygons.iter().map(Vec::len).sum()
    }

    /// True if there are no segments at all.
    pub fn is_empty(&self) -> bool {
        self.polygons.iter().all(Vec::is_empty)
    }

    /// The segment at `at`, if the address is current.
    pub fn segment(&self, at: SegmentRef) -> Option<Line> {
        self.polygons.get(at.polygon)?.get(at.segment).copied()
    }

    pub(crate) fn segment_mut(&mut self, at: SegmentRef) -> Option<&mut Line> {
        self.polygons.get_mut(at.polygon)?.get_mut(at.segment)
    }

    /// Every segment with its address, polygon by polygon.
    pub fn iter(&self) -> impl Iterator<Item = (SegmentRef, Line)> + '_ {
        self.polygons.iter().enumerate().flat_map(|(p, segs)| {
            segs.iter()
                .enumerate()
                .map(move |(i, &line)| (SegmentRef::new(p, i), line))
        })
    }

    /// Append a polygon.
    pub fn push_polygon(&mut self, polygon: Vec<Line>) {
        self.polygons.push(polygon);
    }

    /// Remove the addressed segments. Returns how many were removed.
    ///
    /// Duplicate and stale addresses are ignored. Addresses are processed
    /// from the highest in-polygon position down so that earlier ones stay
    /// valid while the list shrinks.
    pub fn remove_segments(&mut self, refs: &mut Vec<SegmentRef>) -> usize {
        refs.sort_unstable_by(|a, b| {
            a.polygon
                .cmp(&b.polygon)
                .then_with(|| b.segment.cmp(&a.segment))
        });
        refs.dedup();
        let mut removed = 0;
        for at in refs.iter() {
            if let Some(polygon) = self.polygons.get_mut(at.polygon) {
                if at.segment < polygon.len() {
                    polygon.remove(at.segment);
                    removed += 1;
                }
            }
        }
        removed
    }

    /// Append segments to the last polygon, creating one if there is none.
    pub fn append_to_last(&mut self, segments: impl IntoIterator<Item = Line>) {
        if self.polygons.is_empty() {
            self.polygons.push(Vec::new());
        }
        if let Some(last) = self.polygons.last_mut() {
            last.extend(segments);
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "The piece count is a small positive integer after ceil."
)]
fn subdivide(line: Line, step: f64, out: &mut Vec<Line>) {
    let length = line.p0.distance(line.p1);
    let pieces = if step.is_finite() && step > 0.0 && length > step {
        (length / step).ceil() as usize
    } else {
        1
    };
    let dir = if length > 0.0 {
        (line.p1 - line.p0) / length
    } else {
        kurbo::Vec2::ZERO
    };
    let mut from = line.p0;
    for i in 1..=pieces {
        let to = if i == pieces {
            line.p1
        } else {
            line.p0 + dir * (step * i as f64)
        };
        out.push(Line::new(from, to));
        from = to;
    }
}
