//! # Spatial Tree Interface
//!
//! The renderer never builds or walks a tree itself; it consumes one through
//! the narrow traits defined here. Any spatial partitioning structure that can
//! report its terminal cells (leaf count plus per-leaf bounding corners) can
//! be visualized, regardless of how it stores or subdivides space.

use cgmath::Point3;

/// A terminal cell of a spatial partitioning tree, identified by its
/// axis-aligned bounding box.
pub trait LeafNode {
    /// The minimum corner of the cell's bounding box.
    fn lower_bounds(&self) -> Point3<f32>;

    /// The maximum corner of the cell's bounding box.
    ///
    /// Expected to satisfy `upper >= lower` on every axis; this is not
    /// checked anywhere in the crate.
    fn upper_bounds(&self) -> Point3<f32>;
}

/// Read access to the leaf cells of a spatial partitioning tree.
///
/// `leaf` returns an owned value so trees that synthesize leaf handles on
/// demand can implement the trait without tying the handle's lifetime to the
/// tree borrow.
pub trait SpatialTree {
    /// The leaf handle type this tree hands out.
    type Leaf: LeafNode;

    /// Number of leaf cells in the tree.
    fn leaf_count(&self) -> usize;

    /// Fetch leaf `index`, valid for `0..leaf_count()`.
    fn leaf(&self, index: usize) -> Self::Leaf;
}

/// A free-standing leaf cell: just its two bounding corners.
///
/// Useful for demos and tests, and as a ready-made `Leaf` type for trees that
/// store bounds rather than richer node objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeafBox {
    /// Minimum corner of the cell
    pub lower: Point3<f32>,
    /// Maximum corner of the cell
    pub upper: Point3<f32>,
}

impl LeafBox {
    /// Create a leaf cell from its two bounding corners.
    pub fn new(lower: Point3<f32>, upper: Point3<f32>) -> Self {
        Self { lower, upper }
    }

    /// Create a cubic leaf cell from its lower corner and edge length.
    pub fn cube(corner: Point3<f32>, length: f32) -> Self {
        Self {
            lower: corner,
            upper: Point3::new(corner.x + length, corner.y + length, corner.z + length),
        }
    }
}

impl LeafNode for LeafBox {
    fn lower_bounds(&self) -> Point3<f32> {
        self.lower
    }

    fn upper_bounds(&self) -> Point3<f32> {
        self.upper
    }
}

/// Any slice of leaf cells acts as a flat "tree": every element is a leaf.
impl<L: LeafNode + Clone> SpatialTree for [L] {
    type Leaf = L;

    fn leaf_count(&self) -> usize {
        self.len()
    }

    fn leaf(&self, index: usize) -> L {
        self[index].clone()
    }
}

impl<L: LeafNode + Clone> SpatialTree for Vec<L> {
    type Leaf = L;

    fn leaf_count(&self) -> usize {
        self.len()
    }

    fn leaf(&self, index: usize) -> L {
        self[index].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_box_bounds() {
        let leaf = LeafBox::new(Point3::new(0.0, 1.0, 2.0), Point3::new(3.0, 4.0, 5.0));
        assert_eq!(leaf.lower_bounds(), Point3::new(0.0, 1.0, 2.0));
        assert_eq!(leaf.upper_bounds(), Point3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn test_cube_constructor() {
        let leaf = LeafBox::cube(Point3::new(1.0, 2.0, 3.0), 0.5);
        assert_eq!(leaf.lower, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(leaf.upper, Point3::new(1.5, 2.5, 3.5));
    }

    #[test]
    fn test_vec_is_a_tree() {
        let leaves = vec![
            LeafBox::cube(Point3::new(0.0, 0.0, 0.0), 1.0),
            LeafBox::cube(Point3::new(1.0, 0.0, 0.0), 1.0),
        ];
        assert_eq!(leaves.leaf_count(), 2);
        assert_eq!(leaves.leaf(1).lower, Point3::new(1.0, 0.0, 0.0));
    }
}
