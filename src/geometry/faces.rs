//! # Cube Face Construction
//!
//! Functions that turn a corner point and an edge length into the six planar
//! quads bounding an axis-aligned cube. All functions are pure: the same
//! corner and length always produce the same grids, and nothing is validated.
//! A zero length yields flat zero-area quads; a negative length yields
//! inverted faces. Both are rendered as-is.

use super::{Face, FacePair, Grid};
use cgmath::Point3;

fn constant_grid(v: f32) -> Grid {
    [[v, v], [v, v]]
}

/// Expand two sample ranges into meshgrid form: the first range varies along
/// a row, the second varies down the rows.
fn meshgrid(a: [f32; 2], b: [f32; 2]) -> (Grid, Grid) {
    ([a, a], [[b[0], b[0]], [b[1], b[1]]])
}

/// Build the two constant-z faces of a cube: bottom at `corner.z`, top at
/// `corner.z + length`.
///
/// Both faces span `[corner.x, corner.x + length]` in x and
/// `[corner.y, corner.y + length]` in y.
pub fn face_pair_xy(corner: Point3<f32>, length: f32) -> FacePair {
    let (x, y) = meshgrid(
        [corner.x, corner.x + length],
        [corner.y, corner.y + length],
    );
    let low = Face {
        x,
        y,
        z: constant_grid(corner.z),
    };
    let high = Face {
        x,
        y,
        z: constant_grid(corner.z + length),
    };
    (low, high)
}

/// Build the two constant-x faces of a cube, at `corner.x` and
/// `corner.x + length`, spanning the cube's y and z ranges.
pub fn face_pair_yz(corner: Point3<f32>, length: f32) -> FacePair {
    let (y, z) = meshgrid(
        [corner.y, corner.y + length],
        [corner.z, corner.z + length],
    );
    let low = Face {
        x: constant_grid(corner.x),
        y,
        z,
    };
    let high = Face {
        x: constant_grid(corner.x + length),
        y,
        z,
    };
    (low, high)
}

/// Build the two constant-y faces of a cube, at `corner.y` and
/// `corner.y + length`, spanning the cube's x and z ranges.
pub fn face_pair_xz(corner: Point3<f32>, length: f32) -> FacePair {
    let (x, z) = meshgrid(
        [corner.x, corner.x + length],
        [corner.z, corner.z + length],
    );
    let low = Face {
        x,
        y: constant_grid(corner.y),
        z,
    };
    let high = Face {
        x,
        y: constant_grid(corner.y + length),
        z,
    };
    (low, high)
}

/// Build all six faces of a cube from its lower corner and edge length.
///
/// Faces come back in a fixed order: XY-low, XY-high, YZ-low, YZ-high,
/// XZ-low, XZ-high.
pub fn cube_faces(corner: Point3<f32>, length: f32) -> [Face; 6] {
    let (a, b) = face_pair_xy(corner, length);
    let (c, d) = face_pair_yz(corner, length);
    let (e, f) = face_pair_xz(corner, length);
    [a, b, c, d, e, f]
}
