// Copyright 2025 the Crater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded-region quadrant tree generic over scalar `T: Scalar`.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::types::{Aabb2D, Region, Scalar, union_aabb};

/// Default number of entries a leaf holds before it splits.
pub const DEFAULT_CAPACITY: usize = 7;

/// Default split-depth limit.
pub const DEFAULT_MAX_DEPTH: usize = 12;

/// Quadrant tree over a fixed root region.
///
/// Each entry is filed under an *anchor* point (for line segments, one of
/// the endpoints) and carries its own bounding box. Leaves hold up to
/// `capacity` entries; the next insert splits the leaf into four quadrants
/// and redistributes its entries by anchor. Interior nodes hold no entries.
///
/// Every node also tracks the union of the boxes stored beneath it. Range
/// queries prune on that extent rather than on the quadrant bounds, so an
/// entry whose box pokes out of its anchor's quadrant is still found.
///
/// Anchors outside the root region are clamped onto it. Splitting stops at
/// `max_depth`; a leaf at that depth grows without bound, which keeps many
/// coincident anchors from recursing forever.
pub struct QuadTree<T: Scalar, P: Copy + Debug> {
    capacity: usize,
    max_depth: usize,
    arena: Vec<QNode<T, P>>,
    len: usize,
}

#[derive(Clone)]
struct QNode<T: Scalar, P: Copy + Debug> {
    bounds: Aabb2D<T>,
    extent: Option<Aabb2D<T>>,
    depth: usize,
    entries: Vec<QEntry<T, P>>,
    children: Option<[NodeIdx; 4]>,
}

#[derive(Copy, Clone, Debug)]
struct QEntry<T, P> {
    anchor: (T, T),
    bbox: Aabb2D<T>,
    payload: P,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(usize);

impl NodeIdx {
    const fn new(i: usize) -> Self {
        Self(i)
    }

    const fn get(self) -> usize {
        self.0
    }
}

impl<T: Scalar, P: Copy + Debug> QNode<T, P> {
    fn leaf(bounds: Aabb2D<T>, depth: usize) -> Self {
        Self {
            bounds,
            extent: None,
            depth,
            entries: Vec::new(),
            children: None,
        }
    }

    fn grow(&mut self, bbox: Aabb2D<T>) {
        self.extent = Some(match self.extent {
            Some(e) => union_aabb(e, bbox),
            None => bbox,
        });
    }
}

impl<T: Scalar, P: Copy + Debug> QuadTree<T, P> {
    /// Create an empty tree covering `bounds` with the default capacity.
    pub fn new(bounds: Aabb2D<T>) -> Self {
        Self::with_capacity(bounds, DEFAULT_CAPACITY)
    }

    /// Create an empty tree covering `bounds`, splitting leaves that exceed `capacity`.
    ///
    /// A `capacity` of zero is treated as one.
    pub fn with_capacity(bounds: Aabb2D<T>, capacity: usize) -> Self {
        Self::with_limits(bounds, capacity, DEFAULT_MAX_DEPTH)
    }

    /// Create an empty tree with explicit capacity and split-depth limit.
    pub fn with_limits(bounds: Aabb2D<T>, capacity: usize, max_depth: usize) -> Self {
        debug_assert!(!bounds.is_empty(), "quadtree bounds must not be inverted");
        Self {
            capacity: capacity.max(1),
            max_depth,
            arena: vec![QNode::leaf(bounds, 0)],
            len: 0,
        }
    }

    /// Root region.
    pub fn bounds(&self) -> Aabb2D<T> {
        self.arena[0].bounds
    }

    /// Leaf capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes (interior and leaf).
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Depth of the deepest node; a lone root is depth zero.
    pub fn depth(&self) -> usize {
        self.arena.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Union of all stored boxes, or `None` if empty.
    pub fn extent(&self) -> Option<Aabb2D<T>> {
        self.arena[0].extent
    }

    /// Drop every entry and collapse back to a single root leaf.
    pub fn clear(&mut self) {
        let bounds = self.bounds();
        self.arena.clear();
        self.arena.push(QNode::leaf(bounds, 0));
        self.len = 0;
    }

    /// Insert `payload` with bounding box `bbox`, filed under the anchor point `(x, y)`.
    pub fn insert(&mut self, x: T, y: T, bbox: Aabb2D<T>, payload: P) {
        let anchor = self.arena[0].bounds.clamp_point(x, y);
        let entry = QEntry {
            anchor,
            bbox,
            payload,
        };
        let mut idx = 0;
        loop {
            let node = &mut self.arena[idx];
            node.grow(bbox);
            match node.children {
                Some(children) => {
                    idx = children[quadrant_of(&node.bounds, anchor)].get();
                }
                None => {
                    node.entries.push(entry);
                    break;
                }
            }
        }
        self.len += 1;
        if self.should_split(idx) {
            self.split(idx);
        }
    }

    /// Collect payloads whose box intersects `rect`.
    pub fn query_rect(&self, rect: Aabb2D<T>) -> impl Iterator<Item = P> + '_ {
        self.query(Region::Rect(rect))
    }

    /// Collect payloads whose box intersects the closed disk at `(x, y)`.
    pub fn query_circle(&self, x: T, y: T, radius: T) -> impl Iterator<Item = P> + '_ {
        self.query(Region::Circle { x, y, radius })
    }

    /// Collect payloads whose box contains the point.
    pub fn query_point(&self, x: T, y: T) -> impl Iterator<Item = P> + '_ {
        self.query(Region::Rect(Aabb2D::new(x, y, x, y)))
    }

    /// Collect payloads whose box intersects `region`.
    ///
    /// Subtrees whose extent lies entirely inside the region are taken
    /// wholesale without testing individual entries.
    pub fn query(&self, region: Region<T>) -> impl Iterator<Item = P> + '_ {
        let mut out = Vec::new();
        let mut stack = vec![NodeIdx::new(0)];
        while let Some(i) = stack.pop() {
            let n = &self.arena[i.get()];
            let Some(extent) = n.extent else {
                continue;
            };
            if !region.intersects(&extent) {
                continue;
            }
            if region.contains(&extent) {
                self.collect_subtree(i, &mut out);
                continue;
            }
            match n.children {
                Some(children) => stack.extend(children),
                None => {
                    for e in &n.entries {
                        if region.intersects(&e.bbox) {
                            out.push(e.payload);
                        }
                    }
                }
            }
        }
        out.into_iter()
    }

    /// Iterate every payload in storage order.
    pub fn iter(&self) -> impl Iterator<Item = P> + '_ {
        self.arena
            .iter()
            .flat_map(|n| n.entries.iter().map(|e| e.payload))
    }

    fn collect_subtree(&self, root: NodeIdx, out: &mut Vec<P>) {
        let mut stack = vec![root];
        while let Some(i) = stack.pop() {
            let n = &self.arena[i.get()];
            out.extend(n.entries.iter().map(|e| e.payload));
            if let Some(children) = n.children {
                stack.extend(children);
            }
        }
    }

    fn should_split(&self, idx: usize) -> bool {
        let n = &self.arena[idx];
        n.children.is_none() && n.entries.len() > self.capacity && n.depth < self.max_depth
    }

    fn split(&mut self, idx: usize) {
        let (bounds, depth, entries) = {
            let n = &mut self.arena[idx];
            (n.bounds, n.depth, core::mem::take(&mut n.entries))
        };
        let first = self.arena.len();
        for q in quadrants(&bounds) {
            self.arena.push(QNode::leaf(q, depth + 1));
        }
        let children = [
            NodeIdx::new(first),
            NodeIdx::new(first + 1),
            NodeIdx::new(first + 2),
            NodeIdx::new(first + 3),
        ];
        self.arena[idx].children = Some(children);
        for e in entries {
            let child = &mut self.arena[children[quadrant_of(&bounds, e.anchor)].get()];
            child.grow(e.bbox);
            child.entries.push(e);
        }
        // Everything may have landed in one quadrant.
        for c in children {
            if self.should_split(c.get()) {
                self.split(c.get());
            }
        }
    }
}

/// Quadrant order: north-west, north-east, south-west, south-east.
fn quadrants<T: Scalar>(b: &Aabb2D<T>) -> [Aabb2D<T>; 4] {
    let mx = T::mid(b.min_x, b.max_x);
    let my = T::mid(b.min_y, b.max_y);
    [
        Aabb2D::new(b.min_x, b.min_y, mx, my),
        Aabb2D::new(mx, b.min_y, b.max_x, my),
        Aabb2D::new(b.min_x, my, mx, b.max_y),
        Aabb2D::new(mx, my, b.max_x, b.max_y),
    ]
}

// Points on a midline go east/south so every anchor has exactly one home.
fn quadrant_of<T: Scalar>(b: &Aabb2D<T>, (x, y): (T, T)) -> usize {
    let east = x >= T::mid(b.min_x, b.max_x);
    let south = y >= T::mid(b.min_y, b.max_y);
    usize::from(east) + 2 * usize::from(south)
}

impl<T: Scalar, P: Copy + Debug> Debug for QuadTree<T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let leaves = self.arena.iter().filter(|n| n.children.is_none()).count();
        f.debug_struct("QuadTree")
            .field("bounds", &self.bounds())
            .field("capacity", &self.capacity)
            .field("max_depth", &self.max_depth)
            .field("len", &self.len)
            .field("nodes", &self.arena.len())
            .field("leaves", &leaves)
            .finish_non_exhaustive()
    }
}

/// Quadrant tree with i64 coordinates and i128 metrics.
pub type QuadTreeI64<P> = QuadTree<i64, P>;

/// Quadrant tree with f32 coordinates and f64 metrics.
pub type QuadTreeF32<P> = QuadTree<f32, P>;

/// Quadrant tree with f64 coordinates and f64 metrics.
pub type QuadTreeF64<P> = QuadTree<f64, P>;

#[cfg(test)]
mod tests {
    use super::*;

    fn point_box(x: i64, y: i64) -> Aabb2D<i64> {
        Aabb2D::new(x, y, x, y)
    }

    #[test]
    fn splits_once_capacity_is_exceeded() {
        let mut t: QuadTreeI64<u32> = QuadTree::with_capacity(Aabb2D::new(0, 0, 100, 100), 4);
        for i in 0..4 {
            t.insert(i * 10, i * 10, point_box(i * 10, i * 10), i as u32);
        }
        assert_eq!(t.node_count(), 1, "at capacity the root stays a leaf");
        t.insert(90, 90, point_box(90, 90), 4);
        assert_eq!(t.node_count(), 5);
        assert_eq!(t.depth(), 1);
        assert_eq!(t.len(), 5);
        assert!(t.arena[0].entries.is_empty(), "interior nodes hold no entries");
    }

    #[test]
    fn query_rect_matches_brute_force() {
        let mut t: QuadTreeF64<usize> = QuadTree::with_capacity(Aabb2D::new(0.0, 0.0, 256.0, 256.0), 3);
        let mut boxes = Vec::new();
        for i in 0..60_usize {
            let x = ((i * 37) % 250) as f64;
            let y = ((i * 91) % 250) as f64;
            let b = Aabb2D::from_points(x, y, x + 6.0, y - 4.0);
            boxes.push(b);
            t.insert(x, y, b, i);
        }
        let q = Aabb2D::new(40.0, 30.0, 140.0, 120.0);
        let mut got: Vec<_> = t.query_rect(q).collect();
        got.sort_unstable();
        let want: Vec<_> = (0..boxes.len()).filter(|&i| boxes[i].overlaps(&q)).collect();
        assert_eq!(got, want);
    }

    #[test]
    fn entries_spilling_out_of_their_quadrant_are_found() {
        let mut t: QuadTreeF64<u8> = QuadTree::with_capacity(Aabb2D::new(0.0, 0.0, 100.0, 100.0), 1);
        // Anchored in the north-west quadrant, extends far east.
        t.insert(10.0, 10.0, Aabb2D::new(10.0, 10.0, 90.0, 12.0), 1);
        t.insert(20.0, 20.0, Aabb2D::new(20.0, 20.0, 21.0, 21.0), 2);
        t.insert(80.0, 80.0, Aabb2D::new(80.0, 80.0, 81.0, 81.0), 3);
        let hits: Vec<_> = t.query_rect(Aabb2D::new(85.0, 0.0, 100.0, 20.0)).collect();
        assert_eq!(hits, vec![1]);
    }

    #[test]
    fn circle_query_prunes_far_entries() {
        let mut t: QuadTreeF64<u8> = QuadTree::new(Aabb2D::new(0.0, 0.0, 100.0, 100.0));
        for (i, (x, y)) in [(50.0, 50.0), (55.0, 50.0), (90.0, 90.0), (5.0, 95.0)]
            .into_iter()
            .enumerate()
        {
            t.insert(x, y, Aabb2D::new(x, y, x, y), i as u8);
        }
        let mut hits: Vec<_> = t.query_circle(50.0, 50.0, 10.0).collect();
        hits.sort_unstable();
        assert_eq!(hits, vec![0, 1]);
    }

    #[test]
    fn full_bounds_query_returns_everything() {
        let bounds = Aabb2D::new(0, 0, 64, 64);
        let mut t: QuadTreeI64<i64> = QuadTree::with_capacity(bounds, 2);
        for i in 0..40 {
            t.insert(i, 64 - i, Aabb2D::from_points(i, 64 - i, i + 1, 63 - i), i);
        }
        assert_eq!(t.query_rect(bounds).count(), 40);
        assert_eq!(t.iter().count(), 40);
    }

    #[test]
    fn coincident_anchors_stop_at_max_depth() {
        let mut t: QuadTreeF64<u32> =
            QuadTree::with_limits(Aabb2D::new(0.0, 0.0, 10.0, 10.0), 2, 4);
        for i in 0..50 {
            t.insert(3.0, 3.0, Aabb2D::new(3.0, 3.0, 3.0, 3.0), i);
        }
        assert_eq!(t.len(), 50);
        assert_eq!(t.depth(), 4);
        assert_eq!(t.query_point(3.0, 3.0).count(), 50);
    }

    #[test]
    fn out_of_bounds_anchor_is_clamped() {
        let mut t: QuadTreeF64<u8> = QuadTree::new(Aabb2D::new(0.0, 0.0, 10.0, 10.0));
        t.insert(-5.0, 20.0, Aabb2D::new(-5.0, 8.0, 2.0, 20.0), 7);
        assert_eq!(t.query_point(0.0, 9.0).collect::<Vec<_>>(), vec![7]);
        t.clear();
        assert!(t.is_empty());
        assert_eq!(t.node_count(), 1);
        assert_eq!(t.extent(), None);
    }
}
