//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for assembling a scene from helpers and custom objects.

use gizmo3d_core::{AxesHelper, ObjectKey, Scene, SceneObject, Vec3};
use crate::config::AppConfig;
use crate::objects::SceneObjects;

/// Builder for assembling a scene
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new("main")
///     .add_axes_helper(5.0, Vec3::ZERO)
///     .build();
/// ```
pub struct SceneBuilder {
    scene: Scene,
    axes_helper: Option<ObjectKey>,
}

impl SceneBuilder {
    /// Create a new, empty scene builder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            scene: Scene::new(name),
            axes_helper: None,
        }
    }

    /// Create a builder already holding every object the configuration asks for
    pub fn from_config(config: &AppConfig) -> Self {
        let mut builder = Self::new("main");
        let keys = SceneObjects::create(config).attach(&mut builder.scene);
        builder.axes_helper = Some(keys.axes_helper);
        builder
    }

    /// Add an axes helper of the given size at `position`
    pub fn add_axes_helper(mut self, size: f32, position: Vec3) -> Self {
        let mut axes = AxesHelper::new(size);
        axes.set_position(position.x, position.y, position.z);
        let key = self.scene.add(axes);
        self.axes_helper.get_or_insert(key);
        self
    }

    /// Add a custom object to the scene
    pub fn add_object<O: SceneObject>(mut self, object: O) -> Self {
        self.scene.add(object);
        self
    }

    /// Key of the first axes helper added, if any
    pub fn axes_helper(&self) -> Option<ObjectKey> {
        self.axes_helper
    }

    /// Build the scene
    pub fn build(self) -> Scene {
        self.scene
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new("main")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scene() {
        let scene = SceneBuilder::default().build();
        assert!(scene.is_empty());
        assert_eq!(scene.name, "main");
    }

    #[test]
    fn test_from_config() {
        let mut config = AppConfig::default();
        config.scene.axes_size = 8.0;

        let builder = SceneBuilder::from_config(&config);
        let key = builder.axes_helper().unwrap();
        let scene = builder.build();

        assert_eq!(scene.len(), 1);
        assert_eq!(scene.get_as::<AxesHelper>(key).unwrap().size(), 8.0);
    }

    #[test]
    fn test_add_axes_helper_at_position() {
        let builder = SceneBuilder::new("test").add_axes_helper(2.0, Vec3::new(1.0, 0.0, -1.0));
        let key = builder.axes_helper().unwrap();
        let scene = builder.build();

        let axes = scene.get(key).unwrap();
        assert_eq!(axes.node().transform().position, Vec3::new(1.0, 0.0, -1.0));
        let (min, max) = axes.world_bounds().unwrap();
        assert_eq!(min, Vec3::new(1.0, 0.0, -1.0));
        assert_eq!(max, Vec3::new(3.0, 2.0, 1.0));
    }

    #[test]
    fn test_first_axes_helper_is_remembered() {
        let builder = SceneBuilder::new("test")
            .add_axes_helper(1.0, Vec3::ZERO)
            .add_axes_helper(2.0, Vec3::ZERO);
        let key = builder.axes_helper().unwrap();
        let scene = builder.build();

        assert_eq!(scene.len(), 2);
        assert_eq!(scene.get_as::<AxesHelper>(key).unwrap().size(), 1.0);
    }

    #[test]
    fn test_add_object() {
        let scene = SceneBuilder::new("test")
            .add_object(AxesHelper::new(1.0).with_name("custom"))
            .build();
        assert!(scene.find_by_name("custom").is_some());
    }
}
