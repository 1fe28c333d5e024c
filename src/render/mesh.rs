//! # Mesh Surface
//!
//! A [`PlotSurface`] that tessellates every submitted quad into two triangles
//! and accumulates an indexed triangle mesh. The result carries positions,
//! per-face normals, and RGBA vertex colors (the submission's color with its
//! alpha folded in), ready for upload to whatever engine actually displays
//! the scene.

use std::convert::Infallible;

use cgmath::{InnerSpace, Vector3};

use super::{Color, PlotSurface};
use crate::geometry::Face;

/// Accumulated triangle-mesh data for rendered faces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceMesh {
    /// Vertex positions (x, y, z)
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex normals; flat across each quad
    pub normals: Vec<[f32; 3]>,
    /// Per-vertex RGBA colors
    pub colors: Vec<[f32; 4]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl SurfaceMesh {
    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// A plotting surface that collects quads into a [`SurfaceMesh`].
#[derive(Debug, Clone, Default)]
pub struct MeshSurface {
    mesh: SurfaceMesh,
}

impl MeshSurface {
    /// Create a surface with an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the mesh accumulated so far.
    pub fn mesh(&self) -> &SurfaceMesh {
        &self.mesh
    }

    /// Consume the surface and take the accumulated mesh.
    pub fn into_mesh(self) -> SurfaceMesh {
        self.mesh
    }
}

/// Flat normal of a quad from its first three sample points. Degenerate
/// (zero-area) quads get a zero normal rather than NaNs.
fn quad_normal(corners: &[[f32; 3]; 4]) -> [f32; 3] {
    let origin = Vector3::from(corners[0]);
    let u = Vector3::from(corners[1]) - origin;
    let v = Vector3::from(corners[2]) - origin;
    let normal = u.cross(v);
    if normal.magnitude2() > 0.0 {
        normal.normalize().into()
    } else {
        [0.0, 0.0, 0.0]
    }
}

impl PlotSurface for MeshSurface {
    type Error = Infallible;

    fn draw_surface(&mut self, face: &Face, color: Color, alpha: f32) -> Result<(), Infallible> {
        let base = self.mesh.positions.len() as u32;
        let corners = face.corners();
        let normal = quad_normal(&corners);
        let rgba = [color[0], color[1], color[2], alpha];

        for corner in corners {
            self.mesh.positions.push(corner);
            self.mesh.normals.push(normal);
            self.mesh.colors.push(rgba);
        }

        // Corners arrive in grid order (0,0), (0,1), (1,0), (1,1); the quad
        // perimeter is 0-1-3-2, split into two triangles.
        self.mesh
            .indices
            .extend_from_slice(&[base, base + 1, base + 3, base + 3, base + 2, base]);

        Ok(())
    }
}
