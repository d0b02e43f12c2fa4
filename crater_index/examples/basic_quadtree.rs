// Copyright 2025 the Crater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Crater Index: insert segments, then query by rectangle and circle.

use crater_index::{Aabb2D, QuadTree};

fn main() {
    let mut tree: QuadTree<f64, (usize, usize)> =
        QuadTree::new(Aabb2D::new(0.0, 0.0, 200.0, 200.0));

    // A closed square outline, one segment per side, addressed by (polygon, segment).
    let corners = [(20.0, 20.0), (180.0, 20.0), (180.0, 180.0), (20.0, 180.0)];
    for i in 0..corners.len() {
        let (ax, ay) = corners[i];
        let (bx, by) = corners[(i + 1) % corners.len()];
        tree.insert(ax, ay, Aabb2D::from_points(ax, ay, bx, by), (0, i));
    }
    println!("tree: {:?}", tree);

    let top: Vec<_> = tree.query_rect(Aabb2D::new(60.0, 0.0, 120.0, 40.0)).collect();
    println!("segments near the top edge: {:?}", top);

    let corner: Vec<_> = tree.query_circle(180.0, 180.0, 5.0).collect();
    println!("segments touching the south-east corner: {:?}", corner);
}
