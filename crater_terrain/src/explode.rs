// Copyright 2025 the Crater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carving circular craters.

use alloc::vec::Vec;

use kurbo::{Line, Point, Rect, Vec2};
use log::{debug, trace, warn};

use crate::geometry::{approximate_circle_with, segment_intersect};
use crate::outline::SegmentRef;
use crate::terrain::Terrain;
use crate::types::{Ends, Force};

/// Slack around the crater ring when scanning pixels.
const RASTER_PAD: f64 = 2.0;

/// What one call to [`Terrain::explode`] did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Explosion {
    /// Crater center.
    pub center: Point,
    /// Crater radius after clamping.
    pub radius: f64,
    /// Segments in the circle approximation.
    pub steps: usize,
    /// Outline segments returned by the candidate query.
    pub candidates: usize,
    /// Outline segments removed because they lay inside the crater.
    pub removed: usize,
    /// Endpoints snapped onto an intersection.
    pub clipped: usize,
    /// Endpoints collapsed onto their own segment for lack of an intersection.
    pub collapsed: usize,
    /// Circle segments added to the outline.
    pub appended: usize,
    /// Pixel area that may have changed, clipped to the field.
    pub damage: Rect,
}

impl Explosion {
    fn skipped(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            steps: 0,
            candidates: 0,
            removed: 0,
            clipped: 0,
            collapsed: 0,
            appended: 0,
            damage: Rect::ZERO,
        }
    }

    /// Whether the outline was edited at all.
    pub fn changed_outline(&self) -> bool {
        self.removed + self.clipped + self.collapsed + self.appended > 0
    }
}

/// A circle segment that touches existing terrain.
struct ArcPiece {
    line: Line,
    edit: Line,
    /// Endpoints that sampled empty. Empty for a fully buried piece.
    loose: Ends,
    resolved: bool,
}

/// An outline segment near the crater that survives it.
struct Cut {
    at: SegmentRef,
    line: Line,
    edit: Line,
    /// Endpoints strictly inside the crater.
    loose: Ends,
    resolved: bool,
}

impl Terrain {
    /// Carve a circular crater at `center`.
    ///
    /// The pixels inside the crater become empty and a border ring is
    /// painted just outside it, without ever filling a pixel that was
    /// already empty. Outline segments fully inside the crater are removed,
    /// segments straddling its rim are cut at the rim, and the part of the
    /// circle that runs through solid terrain is appended to the last
    /// polygon. The segment index is rebuilt before returning.
    ///
    /// A non-finite radius or center leaves the terrain untouched; a
    /// non-positive radius is clamped to zero. A radius large enough to
    /// swallow the whole field is clamped to the smallest one that still
    /// does, so the report's `radius` may be smaller than requested.
    pub fn explode(&mut self, center: Point, force: impl Into<Force>) -> Explosion {
        let radius = force.into().radius(center);
        if !(center.is_finite() && radius.is_finite()) {
            warn!("explosion at {center:?} with radius {radius} ignored: non-finite input");
            return Explosion::skipped(center, radius);
        }
        let radius = if radius > 0.0 {
            radius
        } else {
            warn!("explosion at {center:?}: radius {radius} clamped to 0");
            0.0
        };
        let config = self.config;
        let thickness = self.border.thickness.max(0.0);
        // Past this the whole field is inside the crater and the rim misses it.
        let reach = farthest_corner(self.pixels.bounds(), center) + thickness + RASTER_PAD;
        let radius = if radius > reach {
            debug!("explosion at {center:?}: radius {radius} clamped to {reach}");
            reach
        } else {
            radius
        };

        let circle = approximate_circle_with(
            center,
            radius,
            config.arc_step,
            config.min_circle_steps,
        );
        let steps = circle.len();
        let mut arc: Vec<ArcPiece> = circle
            .into_iter()
            .filter_map(|line| {
                let solid = self.solid_ends(line);
                if solid.is_empty() {
                    return None;
                }
                Some(ArcPiece {
                    line,
                    edit: line,
                    loose: Ends::all().difference(solid),
                    resolved: false,
                })
            })
            .collect();

        let candidates = self
            .index
            .query_circle(center, radius + config.query_margin.max(thickness));
        let mut doomed = Vec::new();
        let mut cuts = Vec::new();
        for c in &candidates {
            let inside = ends_within(c.line, center, radius);
            if inside == Ends::all() {
                doomed.push(c.at);
            } else {
                cuts.push(Cut {
                    at: c.at,
                    line: c.line,
                    edit: c.line,
                    loose: inside,
                    resolved: false,
                });
            }
        }

        let mut clipped = 0;
        let mut collapsed = 0;
        for piece in arc.iter_mut().filter(|p| !p.loose.is_empty()) {
            let mut hit = false;
            for cut in &mut cuts {
                let Some(p) = segment_intersect(piece.line, cut.line) else {
                    continue;
                };
                hit = true;
                if !piece.resolved {
                    set_ends(&mut piece.edit, piece.loose, p);
                    piece.resolved = true;
                    clipped += 1;
                }
                if !cut.loose.is_empty() && !cut.resolved {
                    set_ends(&mut cut.edit, cut.loose, p);
                    cut.resolved = true;
                    clipped += 1;
                    trace!("welded {:?} at {p:?}", cut.at);
                }
            }
            if !hit {
                collapse(&mut piece.edit, piece.loose);
                collapsed += 1;
                trace!("collapsed circle segment {:?}", piece.line);
            }
        }
        for cut in cuts
            .iter_mut()
            .filter(|c| !c.loose.is_empty() && !c.resolved)
        {
            collapse(&mut cut.edit, cut.loose);
            collapsed += 1;
            trace!("collapsed {:?} with no crossing", cut.at);
        }

        // Edits use pre-removal addresses, so they land first.
        for cut in &cuts {
            if cut.edit != cut.line {
                if let Some(seg) = self.outline.segment_mut(cut.at) {
                    *seg = cut.edit;
                }
            }
        }
        let removed = self.outline.remove_segments(&mut doomed);
        let appended = arc.len();
        self.outline.append_to_last(arc.iter().map(|p| p.edit));

        let damage = self.carve(center, radius, thickness);
        self.rebuild_index();

        let report = Explosion {
            center,
            radius,
            steps,
            candidates: candidates.len(),
            removed,
            clipped,
            collapsed,
            appended,
            damage,
        };
        debug!(
            "explode at ({:.1}, {:.1}) r={:.1}: {} steps, {} candidates, {} removed, {} clipped, {} collapsed, {} appended",
            center.x,
            center.y,
            radius,
            steps,
            report.candidates,
            removed,
            clipped,
            collapsed,
            appended
        );
        report
    }

    /// Raster half of an explosion. Returns the scanned area, or
    /// `Rect::ZERO` when the crater misses the field.
    fn carve(&mut self, center: Point, radius: f64, thickness: f64) -> Rect {
        let ring = radius + thickness;
        let area = Rect::new(
            center.x - ring - RASTER_PAD,
            center.y - ring - RASTER_PAD,
            center.x + ring + RASTER_PAD,
            center.y + ring + RASTER_PAD,
        )
        .intersect(self.pixels.bounds());
        if area.is_zero_area() {
            return Rect::ZERO;
        }
        let marker = self.config.hole_marker;

        let mut scratch = self.pixels.snapshot();
        scratch.fill_disk(center, ring, self.border.color, area);
        scratch.fill_disk(center, radius, marker, area);

        let (xs, ys) = self.pixels.pixel_span(area);
        for y in ys {
            for x in xs.clone() {
                let Some(before) = self.pixels.pixel(x, y) else {
                    continue;
                };
                if before.a == 0 {
                    scratch.set_pixel(x, y, before);
                } else if scratch.pixel(x, y) == Some(marker) {
                    scratch.set_alpha(x, y, 0);
                }
            }
        }
        self.pixels.restore(scratch);
        area
    }

    fn solid_ends(&self, line: Line) -> Ends {
        let mut ends = Ends::empty();
        ends.set(Ends::A, self.pixels.solid_at_point(line.p0));
        ends.set(Ends::B, self.pixels.solid_at_point(line.p1));
        ends
    }
}

fn farthest_corner(bounds: Rect, p: Point) -> f64 {
    let dx = (p.x - bounds.x0).max(bounds.x1 - p.x);
    let dy = (p.y - bounds.y0).max(bounds.y1 - p.y);
    Vec2::new(dx, dy).length()
}

fn ends_within(line: Line, center: Point, radius: f64) -> Ends {
    let mut ends = Ends::empty();
    ends.set(Ends::A, line.p0.distance(center) < radius);
    ends.set(Ends::B, line.p1.distance(center) < radius);
    ends
}

fn set_ends(line: &mut Line, ends: Ends, p: Point) {
    if ends.contains(Ends::A) {
        line.p0 = p;
    }
    if ends.contains(Ends::B) {
        line.p1 = p;
    }
}

/// Pull the loose end of a half-buried segment onto its anchored end.
fn collapse(line: &mut Line, loose: Ends) {
    let anchor = loose.opposite();
    if anchor == Ends::A {
        line.p1 = line.p0;
    } else if anchor == Ends::B {
        line.p0 = line.p1;
    }
}
