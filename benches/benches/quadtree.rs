// Copyright 2025 the Crater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use crater_index::{Aabb2D, QuadTree, QuadTreeF64, QuadTreeI64};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Segments of a wavy ground line, `n` of them, each about `step` long.
fn gen_ground_segments(n: usize, step: f64) -> Vec<(f64, f64, Aabb2D<f64>)> {
    let mut out = Vec::with_capacity(n);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut y = 500.0;
    for i in 0..n {
        let x0 = i as f64 * step;
        let y1 = (y + (rng.next_f64() - 0.5) * step).clamp(0.0, 1000.0);
        out.push((x0, y, Aabb2D::from_points(x0, y, x0 + step, y1)));
        y = y1;
    }
    out
}

/// Short segments scattered over a square, as left behind by many craters.
fn gen_scattered_segments(count: usize, size: f64, len: f64) -> Vec<(f64, f64, Aabb2D<f64>)> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    for _ in 0..count {
        let x0 = rng.next_f64() * size;
        let y0 = rng.next_f64() * size;
        let x1 = x0 + (rng.next_f64() - 0.5) * len;
        let y1 = y0 + (rng.next_f64() - 0.5) * len;
        out.push((x0, y0, Aabb2D::from_points(x0, y0, x1, y1)));
    }
    out
}

fn build(bounds: Aabb2D<f64>, segs: &[(f64, f64, Aabb2D<f64>)], capacity: usize) -> QuadTreeF64<u32> {
    let mut tree = QuadTree::with_capacity(bounds, capacity);
    for (i, &(x, y, bbox)) in segs.iter().enumerate() {
        tree.insert(x, y, bbox, i as u32);
    }
    tree
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_build");
    let bounds = Aabb2D::new(0.0, 0.0, 10_000.0, 1000.0);
    for &n in &[250usize, 1000, 4000] {
        let segs = gen_ground_segments(n, 10_000.0 / n as f64);
        group.throughput(Throughput::Elements(n as u64));
        for &capacity in &[4usize, 7, 16] {
            group.bench_function(format!("ground_n{n}_cap{capacity}"), |b| {
                b.iter(|| black_box(build(bounds, &segs, capacity).node_count()));
            });
        }
    }
    let square = Aabb2D::new(0.0, 0.0, 2000.0, 2000.0);
    let segs = gen_scattered_segments(5000, 2000.0, 12.0);
    group.throughput(Throughput::Elements(segs.len() as u64));
    group.bench_function("scattered_n5000_cap7", |b| {
        b.iter(|| black_box(build(square, &segs, 7).node_count()));
    });
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_query");
    let square = Aabb2D::new(0.0, 0.0, 2000.0, 2000.0);
    let segs = gen_scattered_segments(5000, 2000.0, 12.0);
    let tree = build(square, &segs, 7);
    for &r in &[20.0_f64, 60.0, 200.0] {
        group.bench_function(format!("circle_r{r}"), |b| {
            let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
            b.iter(|| {
                let x = rng.next_f64() * 2000.0;
                let y = rng.next_f64() * 2000.0;
                black_box(tree.query_circle(x, y, r + 10.0).count())
            });
        });
        group.bench_function(format!("rect_w{}", r * 2.0), |b| {
            let mut rng = Rng::new(0xBADC_F00D_1234_5678);
            b.iter(|| {
                let x = rng.next_f64() * 2000.0;
                let y = rng.next_f64() * 2000.0;
                black_box(
                    tree.query_rect(Aabb2D::<f64>::from_xywh(x - r, y - r, 2.0 * r, 2.0 * r))
                        .count(),
                )
            });
        });
    }
    group.bench_function("full_bounds", |b| {
        b.iter(|| black_box(tree.query_rect(square).count()));
    });
    group.finish();
}

fn bench_rebuild_i64(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_rebuild_i64");
    let segs: Vec<_> = gen_scattered_segments(2000, 2000.0, 12.0)
        .into_iter()
        .map(|(x, y, b)| {
            (
                x as i64,
                y as i64,
                Aabb2D::new(b.min_x as i64, b.min_y as i64, b.max_x as i64, b.max_y as i64),
            )
        })
        .collect();
    group.throughput(Throughput::Elements(segs.len() as u64));
    group.bench_function("clear_and_reinsert_n2000", |b| {
        b.iter_batched(
            || QuadTreeI64::<u32>::new(Aabb2D::new(0, 0, 2000, 2000)),
            |mut tree| {
                for (i, &(x, y, bbox)) in segs.iter().enumerate() {
                    tree.insert(x, y, bbox, i as u32);
                }
                tree.clear();
                black_box(tree.node_count());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_query, bench_rebuild_i64);
criterion_main!(benches);
