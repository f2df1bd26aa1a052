//! Scene container for objects
//!
//! Objects are stored in a slot map, so an [`ObjectKey`] stays invalid once its
//! object has been removed, even if the slot is reused.

use slotmap::{new_key_type, SlotMap};
use crate::SceneObject;

new_key_type! {
    /// Generational key to an object in a [`Scene`]
    pub struct ObjectKey;
}

/// The scene containing all objects
pub struct Scene {
    /// Scene name (for logging)
    pub name: String,
    objects: SlotMap<ObjectKey, Box<dyn SceneObject>>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new("scene")
    }
}

impl Scene {
    /// Create a new empty scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: SlotMap::with_key(),
        }
    }

    /// Add an object to the scene, returning its key
    pub fn add<O: SceneObject>(&mut self, object: O) -> ObjectKey {
        self.add_boxed(Box::new(object))
    }

    /// Add an already boxed object
    pub fn add_boxed(&mut self, object: Box<dyn SceneObject>) -> ObjectKey {
        log::debug!("Scene '{}': adding {} '{}'", self.name, object.kind(), object.name());
        self.objects.insert(object)
    }

    /// Remove an object, returning it if the key was valid
    pub fn remove(&mut self, key: ObjectKey) -> Option<Box<dyn SceneObject>> {
        self.objects.remove(key)
    }

    pub fn get(&self, key: ObjectKey) -> Option<&(dyn SceneObject + 'static)> {
        self.objects.get(key).map(|o| &**o)
    }

    pub fn get_mut(&mut self, key: ObjectKey) -> Option<&mut (dyn SceneObject + 'static)> {
        self.objects.get_mut(key).map(|o| &mut **o)
    }

    /// Get an object as its concrete type
    pub fn get_as<T: SceneObject>(&self, key: ObjectKey) -> Option<&T> {
        self.get(key)?.as_any().downcast_ref::<T>()
    }

    /// Get an object mutably as its concrete type
    pub fn get_as_mut<T: SceneObject>(&mut self, key: ObjectKey) -> Option<&mut T> {
        self.get_mut(key)?.as_any_mut().downcast_mut::<T>()
    }

    /// Find the first object with the given name
    pub fn find_by_name(&self, name: &str) -> Option<ObjectKey> {
        self.objects
            .iter()
            .find(|(_, o)| o.name() == name)
            .map(|(key, _)| key)
    }

    /// Iterate over keys and objects
    pub fn iter(&self) -> impl Iterator<Item = (ObjectKey, &(dyn SceneObject + 'static))> {
        self.objects.iter().map(|(key, o)| (key, &**o))
    }

    /// Iterate over visible objects only
    pub fn iter_visible(&self) -> impl Iterator<Item = (ObjectKey, &(dyn SceneObject + 'static))> {
        self.iter().filter(|(_, o)| o.node().is_visible())
    }

    /// Number of objects
    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Remove every object
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Collect the keys of dirty objects and clear their flags
    ///
    /// A renderer calls this once per frame to learn what needs re-uploading.
    pub fn take_dirty(&mut self) -> Vec<ObjectKey> {
        let mut dirty = Vec::new();
        for (key, object) in self.objects.iter_mut() {
            let node = object.node_mut();
            if node.is_dirty() {
                node.clear_dirty();
                dirty.push(key);
            }
        }
        dirty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AxesHelper;

    #[test]
    fn test_scene_new() {
        let scene = Scene::new("test");
        assert!(scene.is_empty());
        assert_eq!(scene.len(), 0);
    }

    #[test]
    fn test_add_and_get_as() {
        let mut scene = Scene::default();
        let key = scene.add(AxesHelper::new(4.0));

        assert_eq!(scene.len(), 1);
        assert_eq!(scene.get(key).unwrap().kind(), "AxesHelper");
        assert_eq!(scene.get_as::<AxesHelper>(key).unwrap().size(), 4.0);
    }

    #[test]
    fn test_get_as_mut() {
        let mut scene = Scene::default();
        let key = scene.add(AxesHelper::new(1.0));

        scene.get_as_mut::<AxesHelper>(key).unwrap().set_visible(false);
        assert_eq!(scene.iter_visible().count(), 0);
    }

    #[test]
    fn test_removed_key_is_stale() {
        let mut scene = Scene::default();
        let first = scene.add(AxesHelper::new(1.0));
        assert!(scene.remove(first).is_some());

        let second = scene.add(AxesHelper::new(2.0));
        assert!(scene.get(first).is_none());
        assert!(scene.remove(first).is_none());
        assert_eq!(scene.get_as::<AxesHelper>(second).unwrap().size(), 2.0);
    }

    #[test]
    fn test_find_by_name() {
        let mut scene = Scene::default();
        scene.add(AxesHelper::new(1.0));
        let named = scene.add(AxesHelper::new(2.0).with_name("origin"));

        assert_eq!(scene.find_by_name("origin"), Some(named));
        assert!(scene.find_by_name("missing").is_none());
    }

    #[test]
    fn test_take_dirty() {
        let mut scene = Scene::default();
        let a = scene.add(AxesHelper::new(1.0));
        let b = scene.add(AxesHelper::new(1.0));

        let mut dirty = scene.take_dirty();
        dirty.sort();
        let mut expected = vec![a, b];
        expected.sort();
        assert_eq!(dirty, expected);
        assert!(scene.take_dirty().is_empty());

        scene.get_as_mut::<AxesHelper>(b).unwrap().set_position(0.0, 1.0, 0.0);
        assert_eq!(scene.take_dirty(), vec![b]);
    }

    #[test]
    fn test_clear() {
        let mut scene = Scene::default();
        scene.add(AxesHelper::new(1.0));
        scene.clear();
        assert!(scene.is_empty());
    }
}
