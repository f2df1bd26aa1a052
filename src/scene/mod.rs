//! Scene construction utilities
//!
//! This module provides a declarative API for assembling the scene.

mod scene_builder;

pub use scene_builder::SceneBuilder;
