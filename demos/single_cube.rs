//! # Single Cube Demo
//!
//! The "Hello World" of boxviz: one unit leaf cell rendered onto a recording
//! surface, with every resulting draw call printed.
//!
//! ## What this example shows:
//! - How to describe leaf cells without a real tree (a plain `Vec<LeafBox>`)
//! - How the renderer turns one leaf into exactly six face submissions
//! - What a face's coordinate grids look like
//!
//! ## Usage:
//! ```bash
//! cargo run --example single_cube
//! ```

use boxviz::prelude::*;

fn main() {
    env_logger::init();

    // A single unit cell with its lower corner at the origin
    let leaves = vec![LeafBox::cube(Point3::new(0.0, 0.0, 0.0), 1.0)];

    let mut surface = RecordingSurface::new();
    boxviz::render_leaves(&leaves, &mut surface).unwrap();

    println!(
        "1 leaf -> {} draw calls (grid hidden: {}, axes hidden: {})",
        surface.calls.len(),
        !surface.grid_visible,
        !surface.axes_visible
    );
    for (i, call) in surface.calls.iter().enumerate() {
        println!(
            "face {}: color {:?} alpha {}\n  x {:?}\n  y {:?}\n  z {:?}",
            i, call.color, call.alpha, call.face.x, call.face.y, call.face.z
        );
    }
}
