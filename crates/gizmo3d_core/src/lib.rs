//! Core types for gizmo3d
//!
//! This crate provides the objects a 3D scene is assembled from:
//!
//! - [`Transform3D`] - Position and uniform scale of an object
//! - [`LineVertex`] / [`LineSegments`] - Colored line-list geometry
//! - [`Node`] - State shared by every scene object (name, tags, transform, visibility)
//! - [`SceneObject`] - Trait implemented by everything a [`Scene`] can hold
//! - [`AxesHelper`] - Red/green/blue lines marking the X/Y/Z axes
//! - [`Scene`] - Container of objects addressed by [`ObjectKey`]

mod transform;
mod geometry;
mod node;
mod axes_helper;
mod scene;

pub use transform::Transform3D;
pub use geometry::{LineVertex, LineSegments};
pub use node::{Node, DirtyFlags, SceneObject};
pub use axes_helper::AxesHelper;
pub use scene::{Scene, ObjectKey};

// Re-export commonly used types from gizmo3d_math for convenience
pub use gizmo3d_math::{Vec3, Color};
