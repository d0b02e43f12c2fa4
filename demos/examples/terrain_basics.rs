// Copyright 2025 the Crater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Terrain basics.
//!
//! Generate rolling hills, carve a few craters and print what each explosion did.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p crater_demos --example terrain_basics`

use crater_demos::Hills;
use crater_terrain::{Force, GenerationRequest, Terrain, TerrainConfig};
use kurbo::Point;
use log::info;

fn main() {
    env_logger::init();

    let request = GenerationRequest::new(320, 120);
    let generated = Terrain::generate(&mut Hills::default(), &request, TerrainConfig::default());
    let mut terrain = match generated {
        Ok(t) => t,
        Err(e) => {
            eprintln!("generation failed: {e}");
            return;
        }
    };
    info!(
        "generated {}x{} terrain with {} outline segments and {} spawn points",
        terrain.pixels().width(),
        terrain.pixels().height(),
        terrain.outline().segment_count(),
        terrain.spawn_points().len()
    );

    let shots = [
        (Point::new(80.0, 66.0), Force::Radius(14.0)),
        (Point::new(90.0, 70.0), Force::Scalar(6.0)),
        (
            Point::new(200.0, 60.0),
            Force::Directional {
                x: 205.0,
                y: 58.0,
                default: 8.0,
            },
        ),
    ];
    for (center, force) in shots {
        let e = terrain.explode(center, force);
        println!(
            "crater at ({:.0}, {:.0}) r={:.1}: removed {}, clipped {}, appended {}, repaint {:?}",
            e.center.x, e.center.y, e.radius, e.removed, e.clipped, e.appended, e.damage
        );
        assert!(!terrain.solid_at(center.x, center.y), "crater center is empty");
    }

    let index = terrain.index();
    println!(
        "index: {} segments in {} nodes, depth {}",
        index.len(),
        index.node_count(),
        index.depth()
    );
    assert_eq!(index.len(), terrain.outline().segment_count());
}
