//! Line-list geometry
//!
//! Vertices are stored pairwise: vertices `2n` and `2n + 1` form segment `n`.
//! [`LineVertex`] is `Pod` so the whole list can be handed to a GPU buffer as bytes.

use bytemuck::{Pod, Zeroable};
use gizmo3d_math::{Color, Vec3};

/// A line vertex with color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Position in local space (x, y, z)
    pub position: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
}

impl LineVertex {
    /// Create a new line vertex
    pub fn new(position: Vec3, color: Color) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_rgba(1.0),
        }
    }

    /// Position as a vector
    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }
}

/// Geometry made of independent line segments
#[derive(Clone, Debug, Default)]
pub struct LineSegments {
    vertices: Vec<LineVertex>,
}

impl LineSegments {
    /// Create empty geometry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create geometry with room for `segments` segments
    pub fn with_capacity(segments: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(segments * 2),
        }
    }

    /// Append a segment from `start` to `end` in a single color
    pub fn push_segment(&mut self, start: Vec3, end: Vec3, color: Color) {
        self.vertices.push(LineVertex::new(start, color));
        self.vertices.push(LineVertex::new(end, color));
    }

    /// Recolor both vertices of segment `index`
    ///
    /// Returns false if the segment does not exist.
    pub fn set_segment_color(&mut self, index: usize, color: Color) -> bool {
        match self.vertices.chunks_exact_mut(2).nth(index) {
            Some(pair) => {
                for v in pair {
                    v.color = color.to_rgba(1.0);
                }
                true
            }
            None => false,
        }
    }

    /// All vertices
    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of segments
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Raw vertex bytes for buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Axis-aligned bounds as (min, max), or None for empty geometry
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.vertices.iter().map(LineVertex::position);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), p| {
            (min.min_components(p), max.max_components(p))
        }))
    }

    /// Drop all vertices and release their storage
    pub fn clear(&mut self) {
        self.vertices = Vec::new();
    }
}
