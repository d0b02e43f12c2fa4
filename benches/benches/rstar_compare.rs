// Copyright 2025 the Crater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use crater_index::{Aabb2D, QuadTree, QuadTreeF64};

use rstar::primitives::Line;
use rstar::{AABB, RTree};

/// A zig-zag outline of `n` segments across a `10 * n` wide field.
fn gen_zigzag(n: usize) -> Vec<[[f64; 2]; 2]> {
    (0..n)
        .map(|i| {
            let x = i as f64 * 10.0;
            let (y0, y1) = if i % 2 == 0 { (40.0, 60.0) } else { (60.0, 40.0) };
            [[x, y0], [x + 10.0, y1]]
        })
        .collect()
}

fn bench_build_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_compare");
    for &n in &[1000usize, 8000] {
        let segs = gen_zigzag(n);
        let width = n as f64 * 10.0;
        let (qx, qy, qr) = (width / 2.0, 50.0, 40.0);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("crater_build_query_n{n}"), |b| {
            b.iter(|| {
                let mut tree: QuadTreeF64<u32> =
                    QuadTree::new(Aabb2D::new(0.0, 0.0, width, 100.0));
                for (i, [a, bb]) in segs.iter().enumerate() {
                    let bbox = Aabb2D::from_points(a[0], a[1], bb[0], bb[1]);
                    tree.insert(a[0], a[1], bbox, i as u32);
                }
                black_box(tree.query_rect(Aabb2D::new(qx - qr, qy - qr, qx + qr, qy + qr)).count())
            });
        });

        group.bench_function(format!("rstar_build_query_bulk_n{n}"), |b| {
            b.iter_batched(
                || {
                    segs.iter()
                        .map(|[a, bb]| Line::new(*a, *bb))
                        .collect::<Vec<_>>()
                },
                |lines| {
                    let tree = RTree::bulk_load(lines);
                    let aabb = AABB::from_corners([qx - qr, qy - qr], [qx + qr, qy + qr]);
                    black_box(tree.locate_in_envelope_intersecting(&aabb).count())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_query);
criterion_main!(benches);
