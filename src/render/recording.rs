//! # Recording Surface
//!
//! A [`PlotSurface`] that stores every submission instead of displaying it.
//! Used as the test double throughout the crate, and handy for inspecting
//! exactly what a renderer produced before wiring up a real backend.

use std::convert::Infallible;

use super::{Color, PlotSurface};
use crate::geometry::Face;

/// One recorded `draw_surface` submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    /// The submitted quad
    pub face: Face,
    /// Color the quad was drawn with
    pub color: Color,
    /// Opacity the quad was drawn with
    pub alpha: f32,
}

/// A plotting surface that records draw calls and chrome toggles.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    /// Every submission, in order
    pub calls: Vec<DrawCall>,
    /// Last grid visibility set on the surface (starts visible)
    pub grid_visible: bool,
    /// Last axes visibility set on the surface (starts visible)
    pub axes_visible: bool,
}

impl RecordingSurface {
    /// Create an empty surface with grid and axes visible.
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            grid_visible: true,
            axes_visible: true,
        }
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotSurface for RecordingSurface {
    type Error = Infallible;

    fn draw_surface(&mut self, face: &Face, color: Color, alpha: f32) -> Result<(), Infallible> {
        self.calls.push(DrawCall {
            face: *face,
            color,
            alpha,
        });
        Ok(())
    }

    fn set_grid_visible(&mut self, visible: bool) {
        self.grid_visible = visible;
    }

    fn set_axes_visible(&mut self, visible: bool) {
        self.axes_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::face_pair_xy;
    use cgmath::Point3;

    #[test]
    fn test_records_submissions_in_order() {
        let mut surface = RecordingSurface::new();
        let (bottom, top) = face_pair_xy(Point3::new(0.0, 0.0, 0.0), 1.0);

        surface.draw_surface(&bottom, [1.0, 0.0, 0.0], 0.5).unwrap();
        surface.draw_surface(&top, [0.0, 1.0, 0.0], 0.25).unwrap();

        assert_eq!(surface.calls.len(), 2);
        assert_eq!(surface.calls[0].face, bottom);
        assert_eq!(surface.calls[0].alpha, 0.5);
        assert_eq!(surface.calls[1].face, top);
        assert_eq!(surface.calls[1].color, [0.0, 1.0, 0.0]);
    }
}
