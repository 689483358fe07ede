use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

/// Transition timing and visibility thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transition", inline)]
#[serde(default)]
pub struct TransitionOptions {
    /// How long a full arrangement switch takes, in seconds.
    #[schemars(title = "Duration", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub duration_secs: f32,
    /// Progress above which parts bound for hiding disappear when
    /// entering a cluster arrangement.
    #[schemars(title = "Hide Threshold", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub hide_threshold: f32,
    /// Progress above which hidden parts re-appear when returning to
    /// the original arrangement.
    #[schemars(title = "Show Threshold", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub show_threshold: f32,
    /// Curve shaping the interpolation factor over progress.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            duration_secs: 3.0,
            hide_threshold: 0.2,
            show_threshold: 0.05,
            easing: EasingFunction::Linear,
        }
    }
}
