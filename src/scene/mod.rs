//! Part storage for a loaded model.
//!
//! A [`Scene`] owns every [`Part`] of the current model in a flat list.
//! Parts are identified by stable ids handed out on insertion; the
//! animation driver walks the list in step with per-part target tables,
//! so insertion order is load order and never changes afterwards.

mod bounds;
mod part;

pub use bounds::Aabb;
pub use part::Part;

/// Flat container for the parts of the currently loaded model.
#[derive(Debug, Default)]
pub struct Scene {
    parts: Vec<Part>,
    next_part_id: u32,
}

impl Scene {
    /// Empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one part and returns its assigned id.
    pub fn add_part(&mut self, mut part: Part) -> u32 {
        let id = self.next_part_id;
        self.next_part_id += 1;
        part.id = id;
        self.parts.push(part);
        id
    }

    /// Adds every part of a model, returning the assigned ids in
    /// insertion order.
    pub fn add_parts(
        &mut self,
        parts: impl IntoIterator<Item = Part>,
    ) -> Vec<u32> {
        parts.into_iter().map(|p| self.add_part(p)).collect()
    }

    /// Looks up a part by id.
    #[must_use]
    pub fn part(&self, id: u32) -> Option<&Part> {
        self.parts.iter().find(|p| p.id == id)
    }

    /// Mutable lookup by id.
    pub fn part_mut(&mut self, id: u32) -> Option<&mut Part> {
        self.parts.iter_mut().find(|p| p.id == id)
    }

    /// All parts in insertion order.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Mutable view of all parts, in insertion order.
    pub fn parts_mut(&mut self) -> &mut [Part] {
        &mut self.parts
    }

    /// Number of parts.
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Number of currently visible parts.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.parts.iter().filter(|p| p.visible).count()
    }

    /// Toggle visibility. Unknown ids are ignored.
    pub fn set_visible(&mut self, id: u32, visible: bool) {
        if let Some(part) = self.part_mut(id) {
            part.visible = visible;
        }
    }

    /// Check if a part exists.
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.parts.iter().any(|p| p.id == id)
    }

    /// Model bounds at authored placement: the union of every part's
    /// local box under its home pose.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        self.parts.iter().fold(Aabb::EMPTY, |acc, p| {
            let world =
                p.bounds.transformed(p.home_orientation, p.home_position);
            acc.union(&world)
        })
    }

    /// Removes every part. Ids keep counting up across loads so a stale
    /// id from a previous model never resolves against the new one.
    pub fn clear(&mut self) {
        self.parts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Quat, Vec3};

    fn cube(name: &str, at: Vec3) -> Part {
        Part::new(
            name,
            Aabb::from_size(Vec3::ONE),
            [0.5, 0.5, 0.5],
            at,
            Quat::IDENTITY,
        )
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut scene = Scene::new();
        let ids = scene.add_parts([
            cube("a", Vec3::ZERO),
            cube("b", Vec3::X),
            cube("c", Vec3::Y),
        ]);
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(scene.part_count(), 3);
        assert_eq!(scene.part(1).map(|p| p.name.as_str()), Some("b"));
    }

    #[test]
    fn test_ids_survive_clear() {
        let mut scene = Scene::new();
        let first = scene.add_part(cube("a", Vec3::ZERO));
        assert!(scene.contains(first));
        scene.clear();
        assert_eq!(scene.part_count(), 0);
        assert!(!scene.contains(first));
        assert!(scene.part(first).is_none());
        let second = scene.add_part(cube("b", Vec3::ZERO));
        assert_ne!(first, second);
    }

    #[test]
    fn test_bounds_union_over_home_positions() {
        let mut scene = Scene::new();
        let _ = scene.add_parts([
            cube("a", Vec3::new(-2.0, 0.0, 0.0)),
            cube("b", Vec3::new(2.0, 0.0, 0.0)),
        ]);
        let bounds = scene.bounds();
        assert_eq!(bounds.min, Vec3::new(-2.5, -0.5, -0.5));
        assert_eq!(bounds.max, Vec3::new(2.5, 0.5, 0.5));
    }

    #[test]
    fn test_bounds_ignore_live_pose() {
        let mut scene = Scene::new();
        let id = scene.add_part(cube("a", Vec3::ZERO));
        if let Some(part) = scene.part_mut(id) {
            part.position = Vec3::new(100.0, 0.0, 0.0);
        }
        // Authored placement, not the live animated pose.
        assert_eq!(scene.bounds().center(), Vec3::ZERO);
        // Per-part world bounds do track the live pose.
        let world = scene
            .part(id)
            .map(Part::world_bounds)
            .unwrap_or(Aabb::EMPTY);
        assert_eq!(world.center(), Vec3::new(100.0, 0.0, 0.0));
    }

    #[test]
    fn test_world_bounds_track_orientation() {
        let mut scene = Scene::new();
        // Local box sitting 4 units off the part's own origin.
        let slab = Aabb::from_size(Vec3::new(2.0, 1.0, 1.0))
            .translated(Vec3::new(4.0, 0.0, 0.0));
        let id = scene.add_part(Part::new(
            "p",
            slab,
            [0.5, 0.5, 0.5],
            Vec3::ZERO,
            Quat::IDENTITY,
        ));
        if let Some(part) = scene.part_mut(id) {
            part.orientation =
                Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        }
        let world = scene
            .part(id)
            .map(Part::world_bounds)
            .unwrap_or(Aabb::EMPTY);
        // The box swings around the pose origin with the quarter turn.
        assert!((world.center() - Vec3::new(0.0, 0.0, -4.0)).length() < 1e-4);
        assert!((world.size() - Vec3::new(1.0, 1.0, 2.0)).length() < 1e-4);
    }

    #[test]
    fn test_visible_count() {
        let mut scene = Scene::new();
        let ids = scene.add_parts([cube("a", Vec3::ZERO), cube("b", Vec3::X)]);
        assert_eq!(scene.visible_count(), 2);
        scene.set_visible(ids[0], false);
        assert_eq!(scene.visible_count(), 1);
        // Unknown ids are ignored rather than panicking.
        scene.set_visible(999, false);
        assert_eq!(scene.visible_count(), 1);
    }

    #[test]
    fn test_empty_scene_bounds() {
        let scene = Scene::new();
        assert!(scene.bounds().is_empty());
    }
}
