//! Bounding-box proportions → named shape category classification.
//!
//! Categories describe a part's silhouette: beams, planes (flat slabs in
//! three aspect ratios, each either facing the viewer or turned edge-on),
//! pillars, and the generic block fallback. An extent only counts as
//! dominant when it beats the others by a decisive ratio, so nominally
//! unequal boxes still read as blocks.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Ratio by which one extent must exceed another to count as dominant.
const DOMINANCE: f32 = 5.0;
/// Looser dominance ratio used by the pillar check.
const PILLAR_DOMINANCE: f32 = 2.0;
/// Aspect ratio beyond which a plane stops counting as square.
const SQUARE_TOLERANCE: f32 = 1.25;

/// Named silhouette class a part's bounding box classifies into.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ShapeCategory {
    /// Long bar spanning left-right: width dominates both other extents.
    BeamFacing,
    /// Long bar spanning up-down: height dominates both other extents.
    BeamSideways,
    /// No dominant extent; the tie-break default.
    Block,
    /// Thin slab lying flat, height being the thin axis.
    HorizontalPlane,
    /// Tall column, at least twice as high as it is wide or deep.
    Pillar,
    /// Wide thin slab facing the viewer.
    PlaneLandscapeFacing,
    /// Wide thin slab turned edge-on.
    PlaneLandscapeSideways,
    /// Tall thin slab facing the viewer.
    PlanePortraitFacing,
    /// Tall thin slab turned edge-on.
    PlanePortraitSideways,
    /// Square thin slab facing the viewer.
    PlaneSquareFacing,
    /// Square thin slab turned edge-on.
    PlaneSquareSideways,
    /// Boxes that cannot be classified (non-finite extents).
    Unknown,
}

impl ShapeCategory {
    /// Whether this is an edge-on plane variant, the family that morphs
    /// into its facing twin by rotating a quarter turn in place.
    #[must_use]
    pub fn is_sideways_plane(self) -> bool {
        matches!(
            self,
            Self::PlaneLandscapeSideways
                | Self::PlanePortraitSideways
                | Self::PlaneSquareSideways
        )
    }

    /// Category this one counts under in the group tally. The facing and
    /// sideways variants of a plane share one entry because the transition
    /// rotates one into the other instead of placing them apart.
    #[must_use]
    pub fn tally_key(self) -> Self {
        match self {
            Self::PlaneLandscapeSideways => Self::PlaneLandscapeFacing,
            Self::PlanePortraitSideways => Self::PlanePortraitFacing,
            Self::PlaneSquareSideways => Self::PlaneSquareFacing,
            other => other,
        }
    }
}

/// Classifies bounding-box extents into a shape category.
///
/// Checks run in priority order: beams, facing planes, horizontal planes,
/// pillars, sideways planes. Deterministic and total: ties fall to
/// [`ShapeCategory::Block`], non-finite extents fall to
/// [`ShapeCategory::Unknown`]. A zero-size box is a block.
#[must_use]
pub fn classify_shape(extents: Vec3) -> ShapeCategory {
    if !extents.is_finite() {
        return ShapeCategory::Unknown;
    }
    let (w, h, d) = (extents.x, extents.y, extents.z);
    if w > h * DOMINANCE && w > d * DOMINANCE {
        return ShapeCategory::BeamFacing;
    }
    if h > w * DOMINANCE && h > d * DOMINANCE {
        return ShapeCategory::BeamSideways;
    }
    if d * DOMINANCE < w && d * DOMINANCE < h {
        return facing_plane(w, h);
    }
    if h * DOMINANCE < w && h * DOMINANCE < d {
        return ShapeCategory::HorizontalPlane;
    }
    if h > w * PILLAR_DOMINANCE && h > d * PILLAR_DOMINANCE {
        return ShapeCategory::Pillar;
    }
    if w * DOMINANCE < h && w * DOMINANCE < d {
        return sideways_plane(h, d);
    }
    ShapeCategory::Block
}

/// Splits a viewer-facing plane by its width-to-height aspect.
fn facing_plane(w: f32, h: f32) -> ShapeCategory {
    if w > h * SQUARE_TOLERANCE {
        ShapeCategory::PlaneLandscapeFacing
    } else if h > w * SQUARE_TOLERANCE {
        ShapeCategory::PlanePortraitFacing
    } else {
        ShapeCategory::PlaneSquareFacing
    }
}

/// Splits an edge-on plane by its depth-to-height aspect; depth takes the
/// width role once the plane turns to face the viewer.
fn sideways_plane(h: f32, d: f32) -> ShapeCategory {
    if d > h * SQUARE_TOLERANCE {
        ShapeCategory::PlaneLandscapeSideways
    } else if h > d * SQUARE_TOLERANCE {
        ShapeCategory::PlanePortraitSideways
    } else {
        ShapeCategory::PlaneSquareSideways
    }
}
