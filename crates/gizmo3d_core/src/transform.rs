//! 3D Transform (position, scale)
//!
//! Helpers are never rotated independently of the scene, so a transform is
//! just a translation and a uniform scale.

use gizmo3d_math::Vec3;

/// A 3D transform with position and uniform scale
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3D {
    /// Position in world space
    pub position: Vec3,
    /// Uniform scale factor
    pub scale: f32,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    /// Create an identity transform
    pub const fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: 1.0,
        }
    }

    /// Transform a point from local space to world space
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        point * self.scale + self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_leaves_points_alone() {
        let t = Transform3D::identity();
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(t.transform_point(p), p);
    }

    #[test]
    fn test_scale_then_translate() {
        let t = Transform3D {
            position: Vec3::new(10.0, 0.0, 0.0),
            scale: 2.0,
        };
        assert_eq!(t.transform_point(Vec3::new(1.0, 1.0, 1.0)), Vec3::new(12.0, 2.0, 2.0));
    }
}
