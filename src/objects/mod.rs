//! Scene objects
//!
//! Every object shown in the scene is created here, one module per object,
//! so scene assembly has a single place to pick them up from.

mod axes_helper;

pub use axes_helper::axes_helper;

use gizmo3d_core::{AxesHelper, ObjectKey, Scene};
use crate::config::AppConfig;

/// All configured scene objects, constructed once at startup
#[derive(Clone, Debug)]
pub struct SceneObjects {
    pub axes_helper: AxesHelper,
}

/// Keys of the objects after [`SceneObjects::attach`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttachedObjects {
    pub axes_helper: ObjectKey,
}

impl SceneObjects {
    /// Construct every object from the loaded configuration
    pub fn create(config: &AppConfig) -> Self {
        let mut axes_helper = axes_helper(&config.scene);
        axes_helper.set_visible(config.scene.show_axes);

        Self { axes_helper }
    }

    /// Hand the objects over to a scene
    pub fn attach(self, scene: &mut Scene) -> AttachedObjects {
        AttachedObjects {
            axes_helper: scene.add(self.axes_helper),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gizmo3d_core::SceneObject;

    #[test]
    fn test_create_uses_config() {
        let mut config = AppConfig::default();
        config.scene.axes_size = 3.0;

        let objects = SceneObjects::create(&config);
        assert_eq!(objects.axes_helper.size(), 3.0);
        assert!(objects.axes_helper.node().is_visible());
    }

    #[test]
    fn test_hidden_axes_are_still_attached() {
        let mut config = AppConfig::default();
        config.scene.show_axes = false;

        let mut scene = Scene::default();
        let keys = SceneObjects::create(&config).attach(&mut scene);

        assert_eq!(scene.len(), 1);
        assert!(!scene.get(keys.axes_helper).unwrap().node().is_visible());
        assert_eq!(scene.iter_visible().count(), 0);
    }
}
