//! Node state and the SceneObject trait
//!
//! Every object placed in a [`Scene`](crate::Scene) carries a [`Node`] with its
//! name, tags, transform, visibility and dirty flags. [`SceneObject`] exposes
//! that node plus the object's line geometry.

use std::any::Any;
use std::collections::HashSet;
use bitflags::bitflags;
use gizmo3d_math::Vec3;
use crate::{LineSegments, Transform3D};

bitflags! {
    /// Flags indicating which parts of an object have changed and need re-uploading
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        /// No changes
        const NONE = 0;
        /// Transform or visibility has changed
        const TRANSFORM = 1 << 0;
        /// Vertex positions have changed
        const GEOMETRY = 1 << 1;
        /// Vertex colors have changed
        const COLOR = 1 << 2;
        /// All flags set - object needs full rebuild
        const ALL = Self::TRANSFORM.bits() | Self::GEOMETRY.bits() | Self::COLOR.bits();
    }
}

/// State shared by every scene object
#[derive(Clone, Debug)]
pub struct Node {
    /// Name used for lookup
    pub name: String,
    /// Tags for categorization (e.g., "helper", "debug")
    pub tags: HashSet<String>,
    transform: Transform3D,
    visible: bool,
    dirty: DirtyFlags,
}

impl Node {
    /// Create a visible node at the origin
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: HashSet::new(),
            transform: Transform3D::identity(),
            visible: true,
            dirty: DirtyFlags::ALL, // New nodes are dirty
        }
    }

    /// Add a tag to this node
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Check if this node has a specific tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    #[inline]
    pub fn transform(&self) -> &Transform3D {
        &self.transform
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set the position and mark the transform as dirty
    pub fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
        self.mark_dirty(DirtyFlags::TRANSFORM);
    }

    /// Set the uniform scale and mark the transform as dirty
    pub fn set_scale(&mut self, scale: f32) {
        self.transform.scale = scale;
        self.mark_dirty(DirtyFlags::TRANSFORM);
    }

    /// Show or hide the node
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.mark_dirty(DirtyFlags::TRANSFORM);
        }
    }

    // --- Dirty tracking methods ---

    #[inline]
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    #[inline]
    pub fn dirty_flags(&self) -> DirtyFlags {
        self.dirty
    }

    #[inline]
    pub fn mark_dirty(&mut self, flags: DirtyFlags) {
        self.dirty |= flags;
    }

    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = DirtyFlags::NONE;
    }
}

/// Anything that can be placed in a [`Scene`](crate::Scene)
pub trait SceneObject: Any {
    /// Short type label used in logs (e.g. "AxesHelper")
    fn kind(&self) -> &'static str;

    /// Shared node state
    fn node(&self) -> &Node;

    /// Mutable node state
    fn node_mut(&mut self) -> &mut Node;

    /// Geometry in local space
    fn geometry(&self) -> &LineSegments;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Name of this object
    fn name(&self) -> &str {
        &self.node().name
    }

    /// World-space bounds, or None if the object has no geometry
    fn world_bounds(&self) -> Option<(Vec3, Vec3)> {
        let (min, max) = self.geometry().bounds()?;
        let t = self.node().transform();
        let a = t.transform_point(min);
        let b = t.transform_point(max);
        Some((a.min_components(b), a.max_components(b)))
    }
}
