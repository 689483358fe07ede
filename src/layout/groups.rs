//! Group membership and slot assignment.
//!
//! One pass over the scene classifies every part and records where it
//! lands inside its color group and its shape group. Slots count in
//! insertion order, so the assignment is stable for a given model.

use rustc_hash::FxHashMap;

use crate::classify::{
    classify_color, classify_shape, ColorBucket, ShapeCategory,
};
use crate::scene::Part;

/// Classification record for one part: its buckets plus where it sits
/// inside each group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartClass {
    /// Color bucket the part's base color classifies into.
    pub bucket: ColorBucket,
    /// Shape category the part's bounding box classifies into.
    pub category: ShapeCategory,
    /// Zero-based slot inside the part's color group.
    pub color_slot: usize,
    /// Zero-based slot inside the part's shape group.
    pub shape_slot: usize,
    /// Anchor index of the part's color group, by first appearance.
    pub color_group: usize,
    /// Anchor index of the part's merged shape group, by first
    /// appearance. Facing and sideways plane variants share one index.
    pub shape_group: usize,
}

/// Result of the grouping pass over a scene's parts.
#[derive(Debug, Default)]
pub(super) struct Grouping {
    /// Per-part classification, parallel to the scene's part list.
    pub(super) classes: Vec<PartClass>,
    /// Color buckets in use, ordered by first appearance.
    pub(super) color_order: Vec<ColorBucket>,
    /// Merged shape categories in use, ordered by first appearance.
    pub(super) shape_order: Vec<ShapeCategory>,
    /// Parts in the block category, which lays out as a grid.
    pub(super) block_count: usize,
}

impl Grouping {
    /// Classifies every part and assigns group and slot indices.
    pub(super) fn classify(parts: &[Part]) -> Self {
        let mut classes = Vec::with_capacity(parts.len());
        let mut color_order: Vec<ColorBucket> = Vec::new();
        let mut shape_order: Vec<ShapeCategory> = Vec::new();
        let mut color_slots: FxHashMap<ColorBucket, usize> =
            FxHashMap::default();
        let mut shape_slots: FxHashMap<ShapeCategory, usize> =
            FxHashMap::default();
        let mut block_count = 0;

        for part in parts {
            let bucket = classify_color(part.color);
            let category = classify_shape(part.bounds.size());
            if category == ShapeCategory::Block {
                block_count += 1;
            }

            let color_slot = next_slot(&mut color_slots, bucket);
            let shape_slot = next_slot(&mut shape_slots, category);
            let color_group = order_index(&mut color_order, bucket);
            let shape_group =
                order_index(&mut shape_order, category.tally_key());

            classes.push(PartClass {
                bucket,
                category,
                color_slot,
                shape_slot,
                color_group,
                shape_group,
            });
        }

        Self {
            classes,
            color_order,
            shape_order,
            block_count,
        }
    }
}

/// Count of previously seen parts sharing `key`, advancing the counter.
fn next_slot<K: std::hash::Hash + Eq>(
    slots: &mut FxHashMap<K, usize>,
    key: K,
) -> usize {
    let entry = slots.entry(key).or_insert(0);
    let slot = *entry;
    *entry += 1;
    slot
}

/// Index of `key` in the first-appearance order, appending it if new.
fn order_index<K: PartialEq + Copy>(order: &mut Vec<K>, key: K) -> usize {
    order.iter().position(|k| *k == key).unwrap_or_else(|| {
        order.push(key);
        order.len() - 1
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Aabb;
    use glam::{Quat, Vec3};

    fn part(color: [f32; 3], size: Vec3) -> Part {
        Part::new(
            "p",
            Aabb::from_size(size),
            color,
            Vec3::ZERO,
            Quat::IDENTITY,
        )
    }

    const RED: [f32; 3] = [1.0, 0.0, 0.0];
    const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
    const GREEN: [f32; 3] = [0.0, 1.0, 0.0];

    #[test]
    fn test_slots_count_per_group() {
        let cube = Vec3::ONE;
        let parts = vec![
            part(RED, cube),
            part(BLUE, cube),
            part(RED, cube),
            part(RED, cube),
            part(BLUE, cube),
        ];
        let grouping = Grouping::classify(&parts);
        let slots: Vec<usize> =
            grouping.classes.iter().map(|c| c.color_slot).collect();
        assert_eq!(slots, vec![0, 0, 1, 2, 1]);
    }

    #[test]
    fn test_groups_ordered_by_first_appearance() {
        let cube = Vec3::ONE;
        let parts = vec![
            part(BLUE, cube),
            part(RED, cube),
            part(BLUE, cube),
            part(GREEN, cube),
        ];
        let grouping = Grouping::classify(&parts);
        assert_eq!(
            grouping.color_order,
            vec![ColorBucket::Blue, ColorBucket::Red, ColorBucket::Green]
        );
        let groups: Vec<usize> =
            grouping.classes.iter().map(|c| c.color_group).collect();
        assert_eq!(groups, vec![0, 1, 0, 2]);
    }

    #[test]
    fn test_plane_pair_shares_group_but_not_slots() {
        let parts = vec![
            part(RED, Vec3::new(0.5, 3.0, 4.0)), // landscape, edge-on
            part(RED, Vec3::new(4.0, 3.0, 0.5)), // landscape, facing
        ];
        let grouping = Grouping::classify(&parts);
        assert_eq!(
            grouping.classes[0].category,
            ShapeCategory::PlaneLandscapeSideways
        );
        assert_eq!(
            grouping.classes[1].category,
            ShapeCategory::PlaneLandscapeFacing
        );
        // One merged group, but each variant keeps its own slot run.
        assert_eq!(grouping.shape_order.len(), 1);
        assert_eq!(grouping.classes[0].shape_group, 0);
        assert_eq!(grouping.classes[1].shape_group, 0);
        assert_eq!(grouping.classes[0].shape_slot, 0);
        assert_eq!(grouping.classes[1].shape_slot, 0);
    }

    #[test]
    fn test_block_count() {
        let parts = vec![
            part(RED, Vec3::ONE),
            part(RED, Vec3::new(4.0, 3.0, 0.5)),
            part(RED, Vec3::ONE),
        ];
        let grouping = Grouping::classify(&parts);
        assert_eq!(grouping.block_count, 2);
    }

    #[test]
    fn test_every_part_classified() {
        let parts = vec![
            part(RED, Vec3::ONE),
            part([f32::NAN, 0.0, 0.0], Vec3::ONE),
            part(GREEN, Vec3::new(1.0, 10.0, 1.0)),
        ];
        let grouping = Grouping::classify(&parts);
        assert_eq!(grouping.classes.len(), parts.len());
        assert_eq!(grouping.classes[1].bucket, ColorBucket::Unknown);
    }
}
