// src/lib.rs
//! Boxviz
//!
//! Renders the leaf cells of a spatial partitioning tree as semi-transparent
//! cube faces on a pluggable 3D plotting surface.

pub mod geometry;
pub mod prelude;
pub mod render;
pub mod tree;

// Re-export main types for convenience
pub use render::{PlotSurface, TreeRenderer};
pub use tree::{LeafNode, SpatialTree};

/// Renders every leaf cell of `tree` onto `surface` with the default style
/// (purple faces at the standard low opacity).
pub fn render_leaves<T, S>(tree: &T, surface: &mut S) -> Result<(), S::Error>
where
    T: SpatialTree + ?Sized,
    S: PlotSurface,
{
    TreeRenderer::default().render(tree, surface)
}
