//! 3D Mathematics Library
//!
//! Value types shared by the gizmo3d crates.
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Color`] - Linear RGB color

mod vec3;
mod color;

pub use vec3::Vec3;
pub use color::Color;
