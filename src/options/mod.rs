//! Tunable engine constants with TOML preset support.
//!
//! The empirically tuned values of the engine (spacing ratios, stack
//! capacities, transition thresholds) are consolidated here rather than
//! baked into code. Options serialize to/from TOML presets, and a JSON
//! schema of the UI-exposed fields is generated for the options panel.

mod layout;
mod transition;

use std::path::Path;

pub use layout::LayoutOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transition::TransitionOptions;

use crate::error::AssortError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[transition]`) work
/// correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Cluster layout tuning.
    pub layout: LayoutOptions,
    /// Transition timing and visibility thresholds.
    pub transition: TransitionOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or does not parse
    /// as options TOML.
    pub fn load(path: &Path) -> Result<Self, AssortError> {
        let content = std::fs::read_to_string(path).map_err(AssortError::Io)?;
        toml::from_str(&content)
            .map_err(|e| AssortError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns an error when serialization fails or the file cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), AssortError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| AssortError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(AssortError::Io)?;
        }
        std::fs::write(path, content).map_err(AssortError::Io)
    }
}
