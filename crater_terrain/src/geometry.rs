// Copyright 2025 the Crater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateless segment geometry used by the destruction pass.

use alloc::vec::Vec;
use core::f64::consts::TAU;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Line, Point};

/// Arc length per circle step used by [`approximate_circle`].
pub const DEFAULT_ARC_STEP: f64 = 10.0;

/// Fewest vertices a circle approximation ever has.
pub const MIN_CIRCLE_STEPS: usize = 3;

/// Most vertices a circle approximation ever has.
pub const MAX_CIRCLE_STEPS: usize = 1 << 16;

/// The point where two segments cross, if they cross within both extents.
///
/// Endpoints count as part of the segment. Parallel and collinear pairs,
/// and zero-length segments, report no intersection.
pub fn segment_intersect(s1: Line, s2: Line) -> Option<Point> {
    let r = s1.p1 - s1.p0;
    let s = s2.p1 - s2.p0;
    let denom = r.cross(s);
    if denom.abs() <= f64::EPSILON * r.length() * s.length() {
        return None;
    }
    let qp = s2.p0 - s1.p0;
    let t = qp.cross(s) / denom;
    let u = qp.cross(r) / denom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(s1.p0 + r * t)
    } else {
        None
    }
}

/// Euclidean distance.
pub fn distance(p1: Point, p2: Point) -> f64 {
    p1.distance(p2)
}

/// Number of polyline steps for a circle of `radius`.
///
/// `floor(2π·radius / arc_step)`, never fewer than `min_steps` and never
/// more than [`MAX_CIRCLE_STEPS`] (or `min_steps`, if that is larger).
#[allow(
    clippy::cast_possible_truncation,
    reason = "Step counts are small and the float is finite and non-negative here."
)]
pub fn circle_steps(radius: f64, arc_step: f64, min_steps: usize) -> usize {
    let min_steps = min_steps.max(1);
    if !(radius.is_finite() && arc_step.is_finite()) || radius <= 0.0 || arc_step <= 0.0 {
        return min_steps;
    }
    let steps = (TAU * radius / arc_step).floor();
    if steps < min_steps as f64 {
        min_steps
    } else if steps >= MAX_CIRCLE_STEPS as f64 {
        MAX_CIRCLE_STEPS.max(min_steps)
    } else {
        steps as usize
    }
}

/// Closed polyline approximating the circle at `center` with about ten units of arc per step.
pub fn approximate_circle(center: Point, radius: f64) -> Vec<Line> {
    approximate_circle_with(center, radius, DEFAULT_ARC_STEP, MIN_CIRCLE_STEPS)
}

/// Closed polyline approximating a circle with a chosen arc step.
///
/// Vertices are floored onto the pixel grid. Segment `i` runs from vertex `i`
/// to vertex `i + 1`; the last segment closes back to vertex 0.
pub fn approximate_circle_with(
    center: Point,
    radius: f64,
    arc_step: f64,
    min_steps: usize,
) -> Vec<Line> {
    let steps = circle_steps(radius, arc_step, min_steps);
    let radius = if radius.is_finite() { radius.max(0.0) } else { 0.0 };
    let step_angle = TAU / steps as f64;
    let vertices: Vec<Point> = (0..steps)
        .map(|i| {
            let angle = i as f64 * step_angle;
            Point::new(
                (center.x + angle.cos() * radius).floor(),
                (center.y + angle.sin() * radius).floor(),
            )
        })
        .collect();
    (0..steps)
        .map(|i| Line::new(vertices[i], vertices[(i + 1) % steps]))
        .collect()
}
