// Copyright 2025 the Crater Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ASCII rendering through the renderer seam.
//!
//! Draw the terrain before and after a barrage, two field pixels per character.
//!
//! Run:
//! - `cargo run -p crater_demos --example ascii_render`

use crater_demos::{AsciiRenderer, Hills};
use crater_terrain::{Force, GenerationRequest, Terrain, TerrainConfig};
use kurbo::{Affine, Point};

fn main() {
    env_logger::init();

    let request = GenerationRequest::new(160, 80);
    let generated = Terrain::generate(&mut Hills::default(), &request, TerrainConfig::default());
    let Ok(mut terrain) = generated else {
        eprintln!("generation failed");
        return;
    };
    let mut screen = AsciiRenderer::default();

    terrain.draw(&mut screen, Affine::IDENTITY, 2.0);
    println!("before:\n{}", screen.frame);

    for i in 0..6_u32 {
        let x = 15.0 + f64::from(i) * 25.0;
        terrain.explode(Point::new(x, 46.0), Force::Radius(8.0 + f64::from(i % 3) * 3.0));
    }

    terrain.draw(&mut screen, Affine::IDENTITY, 2.0);
    println!("after:\n{}", screen.frame);
    println!("'#' ground, '+' crater border, ' ' air");
}
