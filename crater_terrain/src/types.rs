// Copyright 2025 the Crater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small shared types: explosion force, endpoint flags and tuning knobs.

use bitflags::bitflags;
use kurbo::Point;

use crate::color::Rgba8;
use crate::geometry::{DEFAULT_ARC_STEP, MIN_CIRCLE_STEPS};

/// What drives the size of an explosion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Force {
    /// A bare seed; the hole radius is twice the seed.
    Scalar(f64),
    /// The hole radius itself.
    Radius(f64),
    /// A force point plus a base radius.
    ///
    /// The hole radius is twice the distance from the explosion center to
    /// `(x, y)`, plus `default`.
    Directional {
        /// Force point x.
        x: f64,
        /// Force point y.
        y: f64,
        /// Radius added on top of the distance term.
        default: f64,
    },
}

impl Force {
    /// The hole radius this force yields for an explosion at `center`.
    ///
    /// The result is not validated; callers decide what to do with
    /// non-finite or non-positive values.
    pub fn radius(&self, center: Point) -> f64 {
        match *self {
            Self::Scalar(s) => s * 2.0,
            Self::Radius(r) => r,
            Self::Directional { x, y, default } => {
                center.distance(Point::new(x, y)) * 2.0 + default
            }
        }
    }
}

impl From<f64> for Force {
    fn from(seed: f64) -> Self {
        Self::Scalar(seed)
    }
}

bitflags! {
    /// A set of segment endpoints.
    ///
    /// `A` is the start point (`p0`) and `B` the end point (`p1`).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Ends: u8 {
        /// The start point.
        const A = 0b01;
        /// The end point.
        const B = 0b10;
    }
}

impl Ends {
    /// The other endpoint of a single-endpoint set; empty for anything else.
    pub fn opposite(self) -> Self {
        if self == Self::A {
            Self::B
        } else if self == Self::B {
            Self::A
        } else {
            Self::empty()
        }
    }
}

/// Tuning knobs for a [`Terrain`](crate::Terrain).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TerrainConfig {
    /// Segment index leaf capacity.
    pub index_capacity: usize,
    /// Segment index split-depth limit.
    pub index_max_depth: usize,
    /// Arc length per circle step.
    pub arc_step: f64,
    /// Fewest circle steps, however small the radius.
    pub min_circle_steps: usize,
    /// Extra radius for the candidate segment query.
    ///
    /// The border thickness is used instead when it is larger.
    pub query_margin: f64,
    /// Scratch color marking the carved disk during the raster pass.
    ///
    /// Must never appear as real terrain.
    pub hole_marker: Rgba8,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            index_capacity: crater_index::DEFAULT_CAPACITY,
            index_max_depth: crater_index::DEFAULT_MAX_DEPTH,
            arc_step: DEFAULT_ARC_STEP,
            min_circle_steps: MIN_CIRCLE_STEPS,
            query_margin: 10.0,
            hole_marker: Rgba8::rgb(240, 50, 230),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_radius_forms() {
        let c = Point::new(50.0, 50.0);
        assert_eq!(Force::from(10.0).radius(c), 20.0);
        assert_eq!(Force::Radius(20.0).radius(c), 20.0);
        let f = Force::Directional {
            x: 55.0,
            y: 50.0,
            default: 5.0,
        };
        assert_eq!(f.radius(c), 15.0);
    }

    #[test]
    fn opposite_end() {
        assert_eq!(Ends::A.opposite(), Ends::B);
        assert_eq!(Ends::B.opposite(), Ends::A);
        assert!(Ends::all().opposite().is_empty());
        assert!(Ends::empty().opposite().is_empty());
    }
}
