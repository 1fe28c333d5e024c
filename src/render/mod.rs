//! # Tree Rendering
//!
//! This module connects the two external collaborators: it walks the leaf
//! cells of a [`SpatialTree`](crate::tree::SpatialTree), builds each cell's
//! six bounding faces, and submits every face to a [`PlotSurface`] with a
//! fixed color and a low constant opacity. Overlapping cells accumulate
//! visual density through the transparency, which is the whole point of the
//! alpha default being so small.
//!
//! ## Usage
//!
//! ```rust
//! use boxviz::prelude::*;
//!
//! let leaves = vec![LeafBox::cube(Point3::new(0.0, 0.0, 0.0), 1.0)];
//! let mut surface = RecordingSurface::new();
//!
//! TreeRenderer::default()
//!     .render(&leaves, &mut surface)
//!     .unwrap();
//! assert_eq!(surface.calls.len(), 6);
//! ```

pub mod mesh;
pub mod recording;

pub use mesh::{MeshSurface, SurfaceMesh};
pub use recording::{DrawCall, RecordingSurface};

use crate::geometry::{cube_faces, Face};
use crate::tree::{LeafNode, SpatialTree};

/// An RGB color with components in `0.0..=1.0`.
pub type Color = [f32; 3];

/// The fixed color every face is drawn with.
pub const PURPLE: Color = [0.5, 0.0, 0.5];

/// The default per-face opacity. Low enough that a single face is barely
/// visible and density only emerges where many cells overlap.
pub const DEFAULT_ALPHA: f32 = 0.01;

/// A 3D plotting surface that can display parametrized quads.
///
/// This is the produced side of the crate: one required method that accepts a
/// face plus its style, and two optional chrome toggles for backends that
/// draw reference grids or axes around the scene. Backends without chrome
/// keep the default no-op bodies.
pub trait PlotSurface {
    /// Error type raised by the backend. Errors pass through the renderer
    /// unmodified; infallible backends use [`std::convert::Infallible`].
    type Error;

    /// Submit one quad for display with the given color and opacity.
    fn draw_surface(&mut self, face: &Face, color: Color, alpha: f32) -> Result<(), Self::Error>;

    /// Show or hide the surface's reference grid.
    fn set_grid_visible(&mut self, _visible: bool) {}

    /// Show or hide the surface's coordinate axes.
    fn set_axes_visible(&mut self, _visible: bool) {}
}

/// Draws every leaf cell of a spatial tree as a translucent cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeRenderer {
    /// Color applied to every face
    pub color: Color,
    /// Opacity applied to every face
    pub alpha: f32,
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self {
            color: PURPLE,
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl TreeRenderer {
    /// Create a renderer with a custom face color and opacity.
    pub fn new(color: Color, alpha: f32) -> Self {
        Self { color, alpha }
    }

    /// Render every leaf cell of `tree` onto `surface`.
    ///
    /// Hides the surface's grid and axes, then issues exactly six
    /// `draw_surface` calls per leaf. A tree with no leaves renders an empty
    /// scene. The first error from the surface aborts the pass and is
    /// returned unmodified; nothing already drawn is rolled back.
    pub fn render<T, S>(&self, tree: &T, surface: &mut S) -> Result<(), S::Error>
    where
        T: SpatialTree + ?Sized,
        S: PlotSurface,
    {
        surface.set_grid_visible(false);
        surface.set_axes_visible(false);

        let leaf_count = tree.leaf_count();
        log::debug!("rendering {} leaf cells", leaf_count);

        for index in 0..leaf_count {
            let leaf = tree.leaf(index);
            let corner = leaf.lower_bounds();
            // Leaf cells are assumed cubic: the x extent stands in for the
            // edge length on all three axes.
            let length = leaf.upper_bounds().x - corner.x;
            log::trace!(
                "leaf {}: corner ({}, {}, {}), edge {}",
                index,
                corner.x,
                corner.y,
                corner.z,
                length
            );

            for face in &cube_faces(corner, length) {
                surface.draw_surface(face, self.color, self.alpha)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::LeafBox;
    use cgmath::Point3;

    fn unit_leaf() -> LeafBox {
        LeafBox::cube(Point3::new(0.0, 0.0, 0.0), 1.0)
    }

    #[test]
    fn test_single_leaf_issues_six_calls() {
        let mut surface = RecordingSurface::new();
        TreeRenderer::default()
            .render(&vec![unit_leaf()], &mut surface)
            .unwrap();

        assert_eq!(surface.calls.len(), 6);
        for call in &surface.calls {
            assert_eq!(call.color, PURPLE);
            assert_eq!(call.alpha, DEFAULT_ALPHA);
            // Every coordinate of a unit cube at the origin is 0 or 1.
            for corner in call.face.corners() {
                for v in corner {
                    assert!(v == 0.0 || v == 1.0);
                }
            }
        }
    }

    #[test]
    fn test_empty_tree_renders_empty_scene() {
        let mut surface = RecordingSurface::new();
        let leaves: Vec<LeafBox> = Vec::new();
        TreeRenderer::default()
            .render(&leaves, &mut surface)
            .unwrap();
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_two_leaves_issue_twelve_calls() {
        let mut surface = RecordingSurface::new();
        let leaves = vec![
            unit_leaf(),
            LeafBox::cube(Point3::new(5.0, 5.0, 5.0), 2.0),
        ];
        TreeRenderer::default()
            .render(&leaves, &mut surface)
            .unwrap();

        assert_eq!(surface.calls.len(), 12);
        // The first six calls come from the first leaf only.
        for call in &surface.calls[..6] {
            for corner in call.face.corners() {
                for v in corner {
                    assert!(v == 0.0 || v == 1.0);
                }
            }
        }
        for call in &surface.calls[6..] {
            for corner in call.face.corners() {
                for v in corner {
                    assert!(v == 5.0 || v == 7.0);
                }
            }
        }
    }

    #[test]
    fn test_hides_grid_and_axes() {
        let mut surface = RecordingSurface::new();
        assert!(surface.grid_visible);
        assert!(surface.axes_visible);

        let leaves: Vec<LeafBox> = Vec::new();
        TreeRenderer::default()
            .render(&leaves, &mut surface)
            .unwrap();
        assert!(!surface.grid_visible);
        assert!(!surface.axes_visible);
    }

    #[test]
    fn test_uses_x_extent_for_all_axes() {
        // Non-cubic bounds: only the x extent feeds the edge length, so the
        // rendered cell is a 2x2x2 cube even though the box is 2x5x9.
        let mut surface = RecordingSurface::new();
        let leaves = vec![LeafBox::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 5.0, 9.0),
        )];
        TreeRenderer::default()
            .render(&leaves, &mut surface)
            .unwrap();

        for call in &surface.calls {
            for corner in call.face.corners() {
                for v in corner {
                    assert!(v == 0.0 || v == 2.0);
                }
            }
        }
    }

    #[test]
    fn test_custom_style_reaches_every_call() {
        let mut surface = RecordingSurface::new();
        let renderer = TreeRenderer::new([1.0, 0.5, 0.0], 0.25);
        renderer
            .render(&vec![unit_leaf()], &mut surface)
            .unwrap();

        for call in &surface.calls {
            assert_eq!(call.color, [1.0, 0.5, 0.0]);
            assert_eq!(call.alpha, 0.25);
        }
    }

    #[test]
    fn test_slice_tree_renders_too() {
        let mut surface = RecordingSurface::new();
        let leaves = [unit_leaf()];
        TreeRenderer::default()
            .render(&leaves[..], &mut surface)
            .unwrap();
        assert_eq!(surface.calls.len(), 6);
    }
}
