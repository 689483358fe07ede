//! Time-based transitions between part arrangements.
//!
//! The [`TransitionDriver`] owns a single progress value per
//! mode-switch and advances it every tick by elapsed wall-clock time,
//! steering every part of the scene toward its precomputed target.
//! Visibility changes are gated by [`should_be_visible`] rather than
//! faded.

mod driver;
mod visibility;

pub use driver::{TransitionDriver, TransitionState};
pub use visibility::should_be_visible;
