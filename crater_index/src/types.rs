// Copyright 2025 the Crater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;
use core::fmt::Debug;

/// Axis-aligned bounding box in 2D.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Aabb2D<T> {
    /// Minimum x (left)
    pub min_x: T,
    /// Minimum y (top)
    pub min_y: T,
    /// Maximum x (right)
    pub max_x: T,
    /// Maximum y (bottom)
    pub max_y: T,
}

impl<T> Aabb2D<T> {
    /// Create a new AABB from min/max corners.
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl<T: Copy + PartialOrd> Aabb2D<T> {
    /// The smallest AABB containing both endpoints of a segment.
    pub fn from_points(ax: T, ay: T, bx: T, by: T) -> Self {
        Self {
            min_x: min_t(ax, bx),
            min_y: min_t(ay, by),
            max_x: max_t(ax, bx),
            max_y: max_t(ay, by),
        }
    }

    /// Whether `other` lies entirely inside this AABB (edges inclusive).
    pub fn contains(&self, other: &Self) -> bool {
        le(self.min_x, other.min_x)
            && le(self.min_y, other.min_y)
            && le(other.max_x, self.max_x)
            && le(other.max_y, self.max_y)
    }

    /// The intersection of two AABBs.
    pub fn intersect(&self, other: &Self) -> Self {
        let min_x = max_t(self.min_x, other.min_x);
        let min_y = max_t(self.min_y, other.min_y);
        let max_x = min_t(self.max_x, other.max_x);
        let max_y = min_t(self.max_y, other.max_y);
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Whether two AABBs share at least one point. Touching edges count.
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.intersect(other).is_empty()
    }

    /// Clamp a point onto this AABB.
    pub fn clamp_point(&self, x: T, y: T) -> (T, T) {
        (
            min_t(max_t(x, self.min_x), self.max_x),
            min_t(max_t(y, self.min_y), self.max_y),
        )
    }

    /// Return true if the AABB is empty or inverted (no area). Assumes no NaN.
    pub fn is_empty(&self) -> bool {
        lt(self.max_x, self.min_x) || lt(self.max_y, self.min_y)
    }
}

impl Aabb2D<f32> {
    /// Create an AABB from origin and size in f32.
    pub const fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + w,
            max_y: y + h,
        }
    }
}

impl Aabb2D<f64> {
    /// Create an AABB from origin and size in f64.
    pub const fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + w,
            max_y: y + h,
        }
    }
}

impl Aabb2D<i64> {
    /// Create an AABB from origin and size in i64.
    pub const fn from_xywh(x: i64, y: i64, w: i64, h: i64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + w,
            max_y: y + h,
        }
    }
}

/// Numeric scalar abstraction used by the quadrant tree.
///
/// The tree only needs to halve a range and to compare squared distances
/// for circle queries. Squares are taken in a widened accumulator type
/// (f32→f64, i64→i128) so that large coordinates do not overflow or lose
/// precision.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Widened accumulator type suitable for squared distances.
    type Acc: Copy
        + PartialOrd
        + core::ops::Add<Output = Self::Acc>
        + core::ops::Mul<Output = Self::Acc>
        + Debug;

    /// Subtract two scalar values: a - b.
    fn sub(a: Self, b: Self) -> Self;

    /// Midpoint between a and b (used for quadrant splits).
    fn mid(a: Self, b: Self) -> Self;

    /// Convert a scalar to the accumulator type.
    fn widen(v: Self) -> Self::Acc;
}

impl Scalar for f32 {
    type Acc = f64;

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        0.5 * (a + b)
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v as f64
    }
}

impl Scalar for f64 {
    type Acc = Self;

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        0.5 * (a + b)
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v
    }
}

impl Scalar for i64 {
    type Acc = i128;

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a.saturating_sub(b)
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        // Average without overflow: (a & b) + ((a ^ b) >> 1)
        (a & b) + ((a ^ b) >> 1)
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v as i128
    }
}

/// A query shape for range lookups.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Region<T> {
    /// Axis-aligned rectangle, edges inclusive.
    Rect(Aabb2D<T>),
    /// Closed disk.
    Circle {
        /// Center x.
        x: T,
        /// Center y.
        y: T,
        /// Radius. Negative radii match nothing.
        radius: T,
    },
}

impl<T: Scalar> Region<T> {
    /// Whether the region shares at least one point with `aabb`.
    pub fn intersects(&self, aabb: &Aabb2D<T>) -> bool {
        match *self {
            Self::Rect(rect) => rect.overlaps(aabb),
            Self::Circle { x, y, radius } => {
                if lt(radius, zero_like(radius)) {
                    return false;
                }
                let (nx, ny) = aabb.clamp_point(x, y);
                let dx = T::widen(T::sub(x, nx));
                let dy = T::widen(T::sub(y, ny));
                let r = T::widen(radius);
                le(dx * dx + dy * dy, r * r)
            }
        }
    }

    /// Whether `aabb` lies entirely inside the region.
    pub fn contains(&self, aabb: &Aabb2D<T>) -> bool {
        match *self {
            Self::Rect(rect) => rect.contains(aabb),
            Self::Circle { x, y, radius } => {
                if lt(radius, zero_like(radius)) {
                    return false;
                }
                // The farthest corner decides containment.
                let fx = farthest(x, aabb.min_x, aabb.max_x);
                let fy = farthest(y, aabb.min_y, aabb.max_y);
                let r = T::widen(radius);
                le(fx * fx + fy * fy, r * r)
            }
        }
    }
}

// Widened distance from `c` to whichever of `lo`/`hi` is farther away.
fn farthest<T: Scalar>(c: T, lo: T, hi: T) -> T::Acc {
    let a = T::widen(T::sub(c, lo));
    let b = T::widen(T::sub(hi, c));
    if lt(a * a, b * b) { b } else { a }
}

// `v - v` is zero for every supported scalar and avoids a `zero()` method.
fn zero_like<T: Scalar>(v: T) -> T {
    T::sub(v, v)
}

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}

pub(crate) fn union_aabb<T: PartialOrd + Copy>(a: Aabb2D<T>, b: Aabb2D<T>) -> Aabb2D<T> {
    Aabb2D {
        min_x: min_t(a.min_x, b.min_x),
        min_y: min_t(a.min_y, b.min_y),
        max_x: max_t(a.max_x, b.max_x),
        max_y: max_t(a.max_y, b.max_y),
    }
}
