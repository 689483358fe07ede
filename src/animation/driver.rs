//! The per-tick transition state machine.

use web_time::Instant;

use super::visibility::should_be_visible;
use crate::layout::{Arrangement, Layout};
use crate::options::TransitionOptions;
use crate::scene::Scene;

/// Where the driver currently stands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionState {
    /// Settled on an arrangement; ticks leave the scene untouched.
    Idle(Arrangement),
    /// Moving between two arrangements.
    Transitioning {
        /// Arrangement the transition started from.
        from: Arrangement,
        /// Arrangement the transition heads toward.
        to: Arrangement,
        /// Accumulated progress in `[0, 1]`.
        progress: f32,
    },
}

/// Advances every part toward the selected arrangement's targets.
///
/// Interpolation works on a moving baseline: each tick lerps the live
/// pose from wherever it currently is toward the target, using the
/// accumulated progress as the factor. The motion therefore stays
/// continuous across frame-rate changes and across arrangement switches
/// made mid-flight, and the final tick (progress 1) lands on the target.
///
/// Position interpolates through the part's bounding-box center, with
/// the pose origin derived afterwards. Orientation changes therefore
/// spin a part about its own geometry instead of swinging it around a
/// local origin the modeler placed elsewhere.
#[derive(Debug)]
pub struct TransitionDriver {
    state: TransitionState,
    /// Timestamp of the previous tick; `None` until the first tick
    /// after construction or a reset.
    last_tick: Option<Instant>,
}

impl TransitionDriver {
    /// Driver idle on the original arrangement.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: TransitionState::Idle(Arrangement::Original),
            last_tick: None,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Arrangement the driver is settled on or heading toward.
    #[must_use]
    pub fn destination(&self) -> Arrangement {
        match self.state {
            TransitionState::Idle(arrangement) => arrangement,
            TransitionState::Transitioning { to, .. } => to,
        }
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, TransitionState::Transitioning { .. })
    }

    /// Selects the arrangement to head toward.
    ///
    /// Selecting the current destination is a no-op. Anything else
    /// starts a fresh transition from the parts' live poses, which is
    /// also how an in-flight transition gets cancelled.
    pub fn select(&mut self, arrangement: Arrangement) {
        let current = self.destination();
        if arrangement == current {
            return;
        }
        log::info!("arrangement selected: {current:?} -> {arrangement:?}");
        self.state = TransitionState::Transitioning {
            from: current,
            to: arrangement,
            progress: 0.0,
        };
    }

    /// Puts the driver back to idle on the original arrangement and
    /// clears the tick timestamp. Called when a model is (re)loaded.
    pub fn reset(&mut self) {
        self.state = TransitionState::Idle(Arrangement::Original);
        self.last_tick = None;
    }

    /// Advances one frame using wall-clock time since the previous
    /// tick. The first tick after construction or a reset sees a zero
    /// time step.
    pub fn tick(
        &mut self,
        scene: &mut Scene,
        layout: &Layout,
        options: &TransitionOptions,
    ) {
        let now = Instant::now();
        let delta = self
            .last_tick
            .map_or(0.0, |last| now.duration_since(last).as_secs_f32());
        self.last_tick = Some(now);
        self.advance(scene, layout, options, delta);
    }

    /// Advances the transition by an explicit time step, in seconds.
    ///
    /// Progress accumulates as `delta / duration`, clamped to 1; every
    /// part's bounding-box center and orientation glide toward the
    /// destination target and its visibility runs through the threshold
    /// gate. Once progress reaches 1 the driver settles to idle.
    pub fn advance(
        &mut self,
        scene: &mut Scene,
        layout: &Layout,
        options: &TransitionOptions,
        delta_secs: f32,
    ) {
        let TransitionState::Transitioning { from, to, progress } = self.state
        else {
            return;
        };

        let duration = options.duration_secs.max(f32::EPSILON);
        let progress = (progress + delta_secs.max(0.0) / duration).min(1.0);
        let factor = options.easing.evaluate(progress);

        let rows = layout.target_rows();
        for (part, row) in scene.parts_mut().iter_mut().zip(rows) {
            let target = &row[to.index()];
            let local_center = part.bounds.center();
            let live_center =
                part.position + part.orientation * local_center;
            let target_center =
                target.position + target.orientation * local_center;
            part.orientation =
                part.orientation.slerp(target.orientation, factor);
            part.position = live_center.lerp(target_center, factor)
                - part.orientation * local_center;
            part.visible = should_be_visible(
                part.visible,
                target.visible,
                to,
                progress,
                options,
            );
        }

        if progress >= 1.0 {
            log::debug!("transition settled on {to:?}");
            self.state = TransitionState::Idle(to);
        } else {
            self.state = TransitionState::Transitioning { from, to, progress };
        }
    }
}

impl Default for TransitionDriver {
    fn default() -> Self {
        Self::new()
    }
}
