//! gizmo3d - assembles the configured scene and reports what it holds

use gizmo3d::config::AppConfig;
use gizmo3d::scene::SceneBuilder;
use gizmo3d_core::{Scene, SceneObject};

fn main() {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting gizmo3d");
    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let mut scene = SceneBuilder::from_config(&config).build();
    log_scene(&scene);

    let uploaded = scene.take_dirty();
    log::debug!("{} objects ready for upload", uploaded.len());
}

fn log_scene(scene: &Scene) {
    log::info!("Scene '{}' holds {} objects", scene.name, scene.len());
    for (_key, object) in scene.iter() {
        let geometry = object.geometry();
        log::info!(
            "  {} '{}': {} segments, {} bytes, visible={}",
            object.kind(),
            object.name(),
            geometry.segment_count(),
            geometry.as_bytes().len(),
            object.node().is_visible(),
        );
        if let Some((min, max)) = object.world_bounds() {
            log::debug!("    bounds {:?} .. {:?}", min, max);
        }
    }
}
