// Copyright 2025 the Crater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use crater_terrain::{BorderStyle, Force, Outline, PixelField, Rgba8, Terrain, TerrainConfig};
use kurbo::Point;

fn slab(width: u32, height: u32) -> Terrain {
    let pixels = PixelField::filled(width, height, Rgba8::rgb(120, 80, 40));
    let outline = Outline::rectangle(pixels.bounds(), 10.0);
    Terrain::new(
        pixels,
        outline,
        BorderStyle::default(),
        TerrainConfig::default(),
    )
}

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("explode_single");
    for &r in &[10.0_f64, 30.0, 80.0] {
        group.bench_function(format!("slab_1280x720_r{r}"), |b| {
            b.iter_batched(
                || slab(1280, 720),
                |mut t| black_box(t.explode(Point::new(640.0, 360.0), Force::Radius(r))),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_barrage(c: &mut Criterion) {
    let mut group = c.benchmark_group("explode_barrage");
    group.sample_size(20);
    group.bench_function("slab_1280x720_x50", |b| {
        b.iter_batched(
            || slab(1280, 720),
            |mut t| {
                for i in 0..50_u32 {
                    let x = 40.0 + f64::from(i * 97 % 1200);
                    let y = 40.0 + f64::from(i * 61 % 640);
                    t.explode(Point::new(x, y), Force::Radius(25.0));
                }
                black_box(t.outline().segment_count())
            },
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_single, bench_barrage);
criterion_main!(benches);
