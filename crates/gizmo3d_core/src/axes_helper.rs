//! Axes helper for visualizing the coordinate system
//!
//! Three line segments start at the local origin and run `size` units along
//! +X (red), +Y (green) and +Z (blue).

use std::any::Any;
use gizmo3d_math::{Color, Vec3};
use crate::{DirtyFlags, LineSegments, Node, SceneObject};

/// Helper to visualize the XYZ axes
#[derive(Clone, Debug)]
pub struct AxesHelper {
    node: Node,
    size: f32,
    geometry: LineSegments,
}

impl AxesHelper {
    /// Name given to new helpers
    pub const DEFAULT_NAME: &'static str = "AxesHelper";

    /// Create an axes helper whose lines are `size` units long
    pub fn new(size: f32) -> Self {
        let mut geometry = LineSegments::with_capacity(3);
        geometry.push_segment(Vec3::ZERO, Vec3::X * size, Color::RED);
        geometry.push_segment(Vec3::ZERO, Vec3::Y * size, Color::GREEN);
        geometry.push_segment(Vec3::ZERO, Vec3::Z * size, Color::BLUE);

        log::debug!("Created AxesHelper with size {}", size);

        Self {
            node: Node::new(Self::DEFAULT_NAME).with_tag("helper"),
            size,
            geometry,
        }
    }

    /// Rename the helper
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.node.name = name.into();
        self
    }

    /// Length of each axis line
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Recolor the X, Y and Z lines
    ///
    /// Does nothing once the helper has been disposed.
    pub fn set_colors(&mut self, x: Color, y: Color, z: Color) {
        if self.is_disposed() {
            return;
        }
        for (i, color) in [x, y, z].into_iter().enumerate() {
            self.geometry.set_segment_color(i, color);
        }
        self.node.mark_dirty(DirtyFlags::COLOR);
    }

    /// Set position
    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.node.set_position(Vec3::new(x, y, z));
    }

    /// Set uniform scale
    pub fn set_scale(&mut self, scale: f32) {
        self.node.set_scale(scale);
    }

    /// Show or hide the helper
    pub fn set_visible(&mut self, visible: bool) {
        self.node.set_visible(visible);
    }

    /// Release the line geometry. Safe to call more than once.
    pub fn dispose(&mut self) {
        if !self.geometry.is_empty() {
            self.geometry.clear();
            self.node.mark_dirty(DirtyFlags::GEOMETRY);
        }
    }

    /// Whether [`dispose`](Self::dispose) has released the geometry
    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.geometry.is_empty()
    }
}

impl Default for AxesHelper {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl SceneObject for AxesHelper {
    fn kind(&self) -> &'static str {
        "AxesHelper"
    }

    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    fn geometry(&self) -> &LineSegments {
        &self.geometry
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
