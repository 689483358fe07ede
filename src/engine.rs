//! Top-level engine facade.
//!
//! [`AssortEngine`] owns the scene, the precomputed target tables, the
//! transition driver and the options tree, and wires them together so an
//! embedder only deals with loading parts, selecting arrangements and
//! ticking frames.

use std::path::Path;

use crate::animation::{TransitionDriver, TransitionState};
use crate::layout::{Arrangement, Layout, LayoutSummary, PartClass};
use crate::options::Options;
use crate::scene::{Part, Scene};

/// Cluster layout and transition engine.
///
/// Loading a model classifies every part and builds the full target
/// table synchronously, so the tables are complete before the first
/// tick runs and any arrangement can be selected immediately.
#[derive(Debug, Default)]
pub struct AssortEngine {
    scene: Scene,
    layout: Layout,
    driver: TransitionDriver,
    options: Options,
    active_preset: Option<String>,
}

impl AssortEngine {
    /// Engine with default options and no model loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with the given options and no model loaded.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Replaces the current model with `parts` and rebuilds the target
    /// tables. Returns the assigned part ids in insertion order.
    ///
    /// The transition driver resets to idle on the original
    /// arrangement, so the new model appears at its authored poses.
    pub fn load_parts(&mut self, parts: Vec<Part>) -> Vec<u32> {
        self.scene.clear();
        let ids = self.scene.add_parts(parts);
        self.rebuild_layout();
        self.driver.reset();
        let summary = self.layout.summary();
        log::info!(
            "model loaded: {} parts, {} color groups, {} shape groups, \
             {} hidden",
            summary.part_count,
            summary.color_group_count,
            summary.shape_group_count,
            summary.hidden_part_count
        );
        ids
    }

    /// Selects the arrangement to transition toward. Selecting the
    /// current destination is a no-op, even mid-flight.
    pub fn select_arrangement(&mut self, arrangement: Arrangement) {
        self.driver.select(arrangement);
    }

    /// Advances one frame using wall-clock time since the previous
    /// tick.
    pub fn tick(&mut self) {
        self.driver
            .tick(&mut self.scene, &self.layout, &self.options.transition);
    }

    /// Advances by an explicit time step, in seconds. For headless
    /// embedders and deterministic replay.
    pub fn advance(&mut self, delta_secs: f32) {
        self.driver.advance(
            &mut self.scene,
            &self.layout,
            &self.options.transition,
            delta_secs,
        );
    }

    /// Arrangement the engine is settled on or heading toward.
    #[must_use]
    pub fn arrangement(&self) -> Arrangement {
        self.driver.destination()
    }

    /// Current transition state.
    #[must_use]
    pub fn transition_state(&self) -> TransitionState {
        self.driver.state()
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.driver.is_transitioning()
    }

    /// Summary counts for the loaded model.
    #[must_use]
    pub fn summary(&self) -> LayoutSummary {
        self.layout.summary()
    }

    /// Classification of one part, by scene index.
    #[must_use]
    pub fn part_class(&self, part_index: usize) -> Option<PartClass> {
        self.layout.class(part_index)
    }

    /// The loaded scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The precomputed target tables.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replaces the options and rebuilds the target tables against the
    /// loaded model. An in-flight transition keeps gliding toward the
    /// refreshed targets from wherever the parts currently are.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.rebuild_layout();
    }

    /// Load a named options preset from the presets directory.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path) {
            Ok(opts) => {
                log::info!("Loaded options preset '{name}'");
                self.set_options(opts);
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to load options preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named preset.
    /// Returns true on success.
    pub fn save_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("Saved options preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to save options preset '{name}': {e}");
                false
            }
        }
    }

    /// Name of the most recently loaded or saved preset, if any.
    #[must_use]
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    fn rebuild_layout(&mut self) {
        self.layout = Layout::build(&self.scene, &self.options.layout);
    }
}
