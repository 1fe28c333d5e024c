//! # Octree Shell Demo
//!
//! Renders the leaf cells of a randomly refined octree-style subdivision into
//! a triangle mesh. The subdivision here is just demo data: a flat list of
//! cubic cells, exactly what a real spatial tree would expose through the
//! `SpatialTree` trait.
//!
//! ## What this example shows:
//! - Feeding many leaf cells to the renderer in one pass
//! - Collecting the result as an indexed triangle mesh (`MeshSurface`)
//! - Why the low default alpha matters: every cell contributes the same
//!   faint color, so refined regions come out denser
//!
//! ## Usage:
//! ```bash
//! cargo run --example octree_shell
//! ```

use boxviz::prelude::*;
use rand::Rng;

/// Recursively split a cubic cell into eight octants, each octant refined
/// further with a probability that shrinks with depth.
fn refine(rng: &mut impl Rng, corner: Point3<f32>, length: f32, depth: u32, out: &mut Vec<LeafBox>) {
    let split_chance = 0.8_f64 / f64::from(depth + 1);
    if depth >= 4 || !rng.random_bool(split_chance) {
        out.push(LeafBox::cube(corner, length));
        return;
    }

    let half = length / 2.0;
    for octant in 0u8..8 {
        let child = Point3::new(
            corner.x + half * f32::from(octant & 1),
            corner.y + half * f32::from((octant >> 1) & 1),
            corner.z + half * f32::from((octant >> 2) & 1),
        );
        refine(rng, child, half, depth + 1, out);
    }
}

fn main() {
    env_logger::init();

    let mut rng = rand::rng();
    let mut leaves = Vec::new();
    refine(&mut rng, Point3::new(0.0, 0.0, 0.0), 16.0, 0, &mut leaves);

    let mut surface = MeshSurface::new();
    boxviz::render_leaves(&leaves, &mut surface).unwrap();

    let mesh = surface.into_mesh();
    println!(
        "{} leaf cells -> {} vertices, {} triangles",
        leaves.len(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
}
