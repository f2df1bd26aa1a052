//! gizmo3d - scene objects and their configuration
//!
//! Loads settings, builds the scene objects from them and assembles a scene
//! ready to be handed to a renderer.

pub mod config;
pub mod objects;
pub mod scene;
