//! Visibility gating during transitions.

use crate::layout::Arrangement;
use crate::options::TransitionOptions;

/// Decides whether a part should be shown at the given point of a
/// transition toward `to`.
///
/// Parts never fade. Once progress clears a threshold the destination
/// arrangement's visibility flag applies immediately; below it the part
/// keeps its current state. Returning to the original arrangement uses
/// the tighter show threshold so hidden parts pop back in early, while
/// entering a cluster arrangement uses the looser hide threshold so
/// parts are seen starting to move before they vanish.
#[must_use]
pub fn should_be_visible(
    current: bool,
    target: bool,
    to: Arrangement,
    progress: f32,
    options: &TransitionOptions,
) -> bool {
    let threshold = if to == Arrangement::Original {
        options.show_threshold
    } else {
        options.hide_threshold
    };
    if progress > threshold {
        target
    } else {
        current
    }
}
