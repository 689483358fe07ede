use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classify::ColorBucket;

/// Cluster layout tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
pub struct LayoutOptions {
    /// Spacing unit as a fraction of the model's bounding diagonal.
    #[schemars(title = "Spacing Scale", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub spacing_scale: f32,
    /// Distance between neighboring group anchors, in spacing units.
    #[schemars(title = "Group Pitch", range(min = 1.0, max = 10.0), extend("step" = 0.5))]
    pub group_pitch: f32,
    /// Stack height after which color stacks fold into a new depth row.
    #[schemars(title = "Stack Capacity", range(min = 1, max = 64))]
    pub stack_capacity: usize,
    /// Color bucket whose parts are hidden in cluster arrangements.
    #[schemars(title = "Hidden Bucket")]
    pub hidden_bucket: ColorBucket,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            spacing_scale: 0.05,
            group_pitch: 4.0,
            stack_capacity: 12,
            hidden_bucket: ColorBucket::Unknown,
        }
    }
}
