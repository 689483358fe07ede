//! A single rigid part of a loaded model.

use glam::{Quat, Vec3};

use super::Aabb;

/// One rigid piece of the model: authored placement plus the live pose
/// the animation driver mutates every tick.
#[derive(Debug, Clone)]
pub struct Part {
    /// Stable identifier assigned by the scene on insertion.
    pub(super) id: u32,
    /// Human-readable name carried over from the source model.
    pub name: String,
    /// Local-space bounds of the part's geometry.
    pub bounds: Aabb,
    /// Base color as linear RGB in `[0, 1]`.
    pub color: [f32; 3],
    /// Authored world-space position.
    pub home_position: Vec3,
    /// Authored world-space orientation.
    pub home_orientation: Quat,
    /// Live world-space position, updated while transitioning.
    pub position: Vec3,
    /// Live world-space orientation, updated while transitioning.
    pub orientation: Quat,
    /// Whether the part is currently shown.
    pub visible: bool,
}

impl Part {
    /// New part at its authored pose. The scene assigns the id when the
    /// part is added.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        bounds: Aabb,
        color: [f32; 3],
        position: Vec3,
        orientation: Quat,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            bounds,
            color,
            home_position: position,
            home_orientation: orientation,
            position,
            orientation,
            visible: true,
        }
    }

    /// Scene-assigned identifier.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// World-space bounds at the live pose: the oriented local box,
    /// re-wrapped axis-aligned.
    #[must_use]
    pub fn world_bounds(&self) -> Aabb {
        self.bounds.transformed(self.orientation, self.position)
    }
}
