//! The scene's axes helper

use gizmo3d_core::AxesHelper;
use crate::config::SceneSettings;

/// Build the axes helper from the configured `axes_size`
pub fn axes_helper(settings: &SceneSettings) -> AxesHelper {
    AxesHelper::new(settings.axes_size)
}
