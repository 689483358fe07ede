//! Target tables for the three part arrangements.
//!
//! [`Layout::build`] runs once per loaded model: it classifies every
//! part, assigns group anchors and slots, and precomputes a target pose
//! and visibility flag for each (part, arrangement) pair. The transition
//! driver reads these tables every tick and never recomputes them.
//!
//! Cluster placement works in two steps. Each group gets a base anchor
//! along the x axis, centered on the model and separated by the group
//! pitch; a part then offsets from its group anchor by slot index —
//! stacked upward for most categories, folded into depth rows for color
//! stacks past capacity, and spread into a near-square grid for blocks.
//!
//! Slots place bounding-box centers. The stored pose position backs the
//! oriented local center out of the slot, so a part whose local origin
//! sits away from its geometry still lands on the grid, not beside it.

mod groups;

pub use groups::PartClass;

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use self::groups::Grouping;
use crate::classify::{ColorBucket, ShapeCategory};
use crate::options::LayoutOptions;
use crate::scene::{Aabb, Scene};

/// Spatial arrangement the user can select.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Arrangement {
    /// The model's authored layout.
    #[default]
    Original,
    /// Parts clustered by color bucket.
    ByColor,
    /// Parts clustered by shape category.
    ByShape,
}

impl Arrangement {
    /// All arrangements, in target-row order.
    pub const ALL: [Self; 3] =
        [Self::Original, Self::ByColor, Self::ByShape];

    /// Index of this arrangement within a target row.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Original => 0,
            Self::ByColor => 1,
            Self::ByShape => 2,
        }
    }
}

/// Target pose and visibility of one part under one arrangement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetState {
    /// World-space position the part heads toward.
    pub position: Vec3,
    /// World-space orientation the part turns toward.
    pub orientation: Quat,
    /// Whether the part is shown once the transition settles.
    pub visible: bool,
}

/// Summary counts served to the info panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LayoutSummary {
    /// Total number of parts in the model.
    pub part_count: usize,
    /// Distinct color buckets in use, the hidden bucket excluded.
    pub color_group_count: usize,
    /// Distinct shape categories in use, with facing/sideways plane
    /// pairs merged into one entry.
    pub shape_group_count: usize,
    /// Parts belonging to the hidden color bucket.
    pub hidden_part_count: usize,
}

/// Precomputed target table: one row of three [`TargetState`]s per part,
/// parallel to the scene's part list.
#[derive(Debug, Default)]
pub struct Layout {
    rows: Vec<[TargetState; 3]>,
    classes: Vec<PartClass>,
    summary: LayoutSummary,
}

impl Layout {
    /// Builds the target table for every part of `scene`.
    ///
    /// Total over any model: a part with a zero-size bounding box still
    /// receives valid targets, and a model with no measurable extent
    /// falls back to a spacing unit of 1.
    #[must_use]
    pub fn build(scene: &Scene, options: &LayoutOptions) -> Self {
        let grouping = Grouping::classify(scene.parts());
        let bounds = scene.bounds();
        let center = bounds.center();
        let spacing = spacing_unit(&bounds, options.spacing_scale);
        let pitch = spacing * options.group_pitch;
        let capacity = options.stack_capacity.max(1);
        let color_groups = grouping.color_order.len();
        let shape_groups = grouping.shape_order.len();
        let block_columns = grid_columns(grouping.block_count);

        let mut rows = Vec::with_capacity(scene.part_count());
        for (part, class) in scene.parts().iter().zip(&grouping.classes) {
            let visible = class.bucket != options.hidden_bucket;
            let local_center = part.bounds.center();
            let original = TargetState {
                position: part.home_position,
                orientation: part.home_orientation,
                visible: true,
            };
            let color_slot = color_target(
                class,
                center,
                spacing,
                pitch,
                color_groups,
                capacity,
            );
            let by_color = TargetState {
                position: cluster_pose(
                    color_slot,
                    part.home_orientation,
                    local_center,
                ),
                orientation: part.home_orientation,
                visible,
            };
            let shape_rot = shape_orientation(class, part.home_orientation);
            let shape_slot = shape_target(
                class,
                center,
                spacing,
                pitch,
                shape_groups,
                block_columns,
            );
            let by_shape = TargetState {
                position: cluster_pose(shape_slot, shape_rot, local_center),
                orientation: shape_rot,
                visible,
            };
            rows.push([original, by_color, by_shape]);
        }

        let summary = LayoutSummary {
            part_count: scene.part_count(),
            color_group_count: grouping
                .color_order
                .iter()
                .filter(|b| **b != options.hidden_bucket)
                .count(),
            shape_group_count: shape_groups,
            hidden_part_count: grouping
                .classes
                .iter()
                .filter(|c| c.bucket == options.hidden_bucket)
                .count(),
        };
        log::debug!(
            "layout: {} parts, {} color groups, {} shape groups",
            summary.part_count,
            summary.color_group_count,
            summary.shape_group_count
        );

        Self {
            rows,
            classes: grouping.classes,
            summary,
        }
    }

    /// Target of one part under one arrangement.
    #[must_use]
    pub fn target(
        &self,
        part_index: usize,
        arrangement: Arrangement,
    ) -> Option<TargetState> {
        self.rows
            .get(part_index)
            .map(|row| row[arrangement.index()])
    }

    /// All target rows, parallel to the scene's part list. Rows are
    /// indexed by [`Arrangement::index`].
    #[must_use]
    pub fn target_rows(&self) -> &[[TargetState; 3]] {
        &self.rows
    }

    /// Per-part classification records, parallel to the part list.
    #[must_use]
    pub fn classes(&self) -> &[PartClass] {
        &self.classes
    }

    /// Classification of one part.
    #[must_use]
    pub fn class(&self, part_index: usize) -> Option<PartClass> {
        self.classes.get(part_index).copied()
    }

    /// Summary counts for reporting.
    #[must_use]
    pub fn summary(&self) -> LayoutSummary {
        self.summary
    }

    /// Number of parts the table covers.
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table covers no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Cluster target under the color arrangement: group anchor plus a
/// stacked slot offset, folding into a new depth row at capacity.
fn color_target(
    class: &PartClass,
    center: Vec3,
    spacing: f32,
    pitch: f32,
    group_count: usize,
    capacity: usize,
) -> Vec3 {
    let anchor = center
        + Vec3::new(
            anchor_x(class.color_group, group_count, pitch),
            0.0,
            color_depth_adjust(class.bucket) * spacing,
        );
    anchor
        + Vec3::new(
            0.0,
            (class.color_slot % capacity) as f32 * spacing,
            (class.color_slot / capacity) as f32 * spacing,
        )
}

/// Cluster target under the shape arrangement: group anchor plus a
/// stacked slot offset, with blocks spread into a near-square grid.
fn shape_target(
    class: &PartClass,
    center: Vec3,
    spacing: f32,
    pitch: f32,
    group_count: usize,
    block_columns: usize,
) -> Vec3 {
    let mut anchor = center
        + Vec3::new(anchor_x(class.shape_group, group_count, pitch), 0.0, 0.0);
    if class.category.is_sideways_plane() {
        // Edge-on planes park just behind their facing twins.
        anchor.z -= 2.0 * spacing;
    }
    let offset = if class.category == ShapeCategory::Block {
        Vec3::new(
            (class.shape_slot % block_columns) as f32 * spacing,
            (class.shape_slot / block_columns) as f32 * spacing,
            0.0,
        )
    } else {
        Vec3::new(0.0, class.shape_slot as f32 * spacing, 0.0)
    };
    anchor + offset
}

/// Orientation a part settles into under the shape arrangement. Edge-on
/// planes take a quarter turn about the vertical axis, composed in the
/// world frame, so they spin in place to face the viewer.
fn shape_orientation(class: &PartClass, home: Quat) -> Quat {
    if class.category.is_sideways_plane() {
        Quat::from_rotation_y(FRAC_PI_2) * home
    } else {
        home
    }
}

/// Pose position that puts the part's bounding-box center on `slot`
/// under the target orientation.
fn cluster_pose(slot: Vec3, orientation: Quat, local_center: Vec3) -> Vec3 {
    slot - orientation * local_center
}

/// Anchor offset along the primary axis, centering groups on the model.
fn anchor_x(index: usize, group_count: usize, pitch: f32) -> f32 {
    (index as f32 - group_count.saturating_sub(1) as f32 * 0.5) * pitch
}

/// Hand-tuned depth adjustment, in spacing units, for named buckets:
/// achromatic stacks park behind the hue line, unknown parks farther.
fn color_depth_adjust(bucket: ColorBucket) -> f32 {
    match bucket {
        ColorBucket::Black | ColorBucket::Grey | ColorBucket::White => -3.0,
        ColorBucket::Unknown => -6.0,
        _ => 0.0,
    }
}

/// Spacing unit derived from the model's bounding diagonal.
fn spacing_unit(bounds: &Aabb, scale: f32) -> f32 {
    let unit = bounds.size().length() * scale;
    if unit.is_finite() && unit > f32::EPSILON {
        unit
    } else {
        1.0
    }
}

/// Grid width for the block category: a roughly square footprint.
fn grid_columns(group_size: usize) -> usize {
    ((group_size as f32).sqrt() as usize).max(1)
}
