// Copyright 2025 the Crater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crater Index: a bounded-region quadrant tree over 2D AABBs.
//!
//! Crater Index is the spatial building block behind terrain destruction queries.
//!
//! - Insert entries filed under an anchor point, each carrying its own bounding box and a payload.
//! - Query by rectangle, circle, or point.
//! - Leaves split into four quadrants once they exceed their capacity (7 by default).
//!
//! It is generic over the scalar type `T` and does not depend on any geometry crate.
//! Higher layers (like a terrain outline) compute segment boxes and feed them here.
//!
//! The tree is meant to be rebuilt wholesale when the data it mirrors changes; there is
//! no removal or update. Rebuilding is O(n log n) expected and keeps payloads (for example
//! positional addresses into a mutable list) from ever going stale.
//!
//! # Example
//!
//! ```rust
//! use crater_index::{Aabb2D, QuadTree};
//!
//! let mut tree: QuadTree<f64, u32> = QuadTree::new(Aabb2D::new(0.0, 0.0, 100.0, 100.0));
//!
//! // A segment from (10, 10) to (30, 12), filed under its first endpoint.
//! tree.insert(10.0, 10.0, Aabb2D::from_points(10.0, 10.0, 30.0, 12.0), 1);
//! tree.insert(80.0, 80.0, Aabb2D::from_points(80.0, 80.0, 85.0, 90.0), 2);
//!
//! let near: Vec<_> = tree.query_circle(25.0, 15.0, 5.0).collect();
//! assert_eq!(near, vec![1]);
//!
//! let all: Vec<_> = tree.query_rect(tree.bounds()).collect();
//! assert_eq!(all.len(), 2);
//! ```
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates.
//! Circle queries compare squared distances in a widened accumulator (`f32`→`f64`, `i64`→`i128`).

#![no_std]

extern crate alloc;

pub mod quadtree;
pub mod types;

pub use quadtree::{
    DEFAULT_CAPACITY, DEFAULT_MAX_DEPTH, QuadTree, QuadTreeF32, QuadTreeF64, QuadTreeI64,
};
pub use types::{Aabb2D, Region, Scalar};
