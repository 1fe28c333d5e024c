//! # Face Geometry
//!
//! This module builds the planar quads that bound an axis-aligned cube, in the
//! parametrized-grid form 3D plotting surfaces consume: one 2x2 coordinate
//! grid per axis.
//!
//! ## Usage
//!
//! ```rust
//! use boxviz::geometry::{cube_faces, face_pair_xy};
//! use cgmath::Point3;
//!
//! // The two constant-z faces of a unit cube at the origin
//! let (bottom, top) = face_pair_xy(Point3::new(0.0, 0.0, 0.0), 1.0);
//! assert_eq!(bottom.z, [[0.0, 0.0], [0.0, 0.0]]);
//! assert_eq!(top.z, [[1.0, 1.0], [1.0, 1.0]]);
//!
//! // All six faces, ready for submission to a plotting surface
//! let faces = cube_faces(Point3::new(0.0, 0.0, 0.0), 1.0);
//! assert_eq!(faces.len(), 6);
//! ```

pub mod faces;

pub use faces::*;

/// A 2x2 grid of coordinate samples along one axis.
///
/// Grids follow meshgrid layout: the first varying axis of the face changes
/// along a row, the second varying axis changes down the rows.
pub type Grid = [[f32; 2]; 2];

/// One planar quad bounding a cube side, as three parallel coordinate grids.
///
/// The grid for the face's fixed axis is constant; the other two span the
/// cube's extent on their axes. Two sample points per axis are the minimum
/// needed to describe a flat quad, so the grids are always 2x2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// X coordinates of the four sample points
    pub x: Grid,
    /// Y coordinates of the four sample points
    pub y: Grid,
    /// Z coordinates of the four sample points
    pub z: Grid,
}

/// The two parallel faces of a cube along one axis, low side first.
pub type FacePair = (Face, Face);

impl Face {
    /// Get the four sample points as (x, y, z) triples, in grid order:
    /// (0,0), (0,1), (1,0), (1,1).
    pub fn corners(&self) -> [[f32; 3]; 4] {
        [
            [self.x[0][0], self.y[0][0], self.z[0][0]],
            [self.x[0][1], self.y[0][1], self.z[0][1]],
            [self.x[1][0], self.y[1][0], self.z[1][0]],
            [self.x[1][1], self.y[1][1], self.z[1][1]],
        ]
    }
}
