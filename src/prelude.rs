//! # Boxviz Prelude
//!
//! This module provides a convenient way to import commonly used types and
//! traits. It's designed to reduce boilerplate imports in typical rendering
//! setups.
//!
//! ## Usage
//!
//! ```rust
//! use boxviz::prelude::*;
//!
//! let leaves = vec![LeafBox::cube(Point3::new(0.0, 0.0, 0.0), 1.0)];
//! let mut surface = MeshSurface::new();
//! boxviz::render_leaves(&leaves, &mut surface).unwrap();
//! ```

// Re-export the convenience entry point
pub use crate::render_leaves;

// Re-export face geometry
pub use crate::geometry::{
    cube_faces, face_pair_xy, face_pair_xz, face_pair_yz, Face, FacePair,
};

// Re-export the tree interface
pub use crate::tree::{LeafBox, LeafNode, SpatialTree};

// Re-export rendering types
pub use crate::render::{
    Color, DrawCall, MeshSurface, PlotSurface, RecordingSurface, SurfaceMesh, TreeRenderer,
    DEFAULT_ALPHA, PURPLE,
};

// Re-export common external dependencies
pub use cgmath::{Point3, Vector3};
