//! Gesture-driven viewport mutation.
//!
//! The host captures pan/zoom gestures however it likes and forwards one
//! [`GestureEvent`] per interaction tick; this module turns it into the next
//! clamped [`ViewportState`].

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{MIN_VISIBLE_BARS_COUNT, ViewportState};

/// One pan/zoom tick as delivered by the host's gesture recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    /// Magnification factor for this tick; `> 1` zooms in (fewer bars in view),
    /// `< 1` zooms out.
    pub zoom_factor: f64,
    /// Horizontal pan displacement in pixels.
    pub pan_delta_x: f64,
}

impl GestureEvent {
    #[must_use]
    pub const fn new(zoom_factor: f64, pan_delta_x: f64) -> Self {
        Self {
            zoom_factor,
            pan_delta_x,
        }
    }
}

/// Applies one gesture tick and returns the next clamped viewport state.
///
/// Conventions:
/// - the visible count is `round(current / zoom_factor)`, clamped to
///   `[MIN_VISIBLE_BARS_COUNT, total_bars_count]`
/// - the scroll clamp uses the pre-update `bar_width`, i.e. the state being
///   replaced rather than the recomputed one
/// - non-finite or non-positive zoom factors count as `1.0`; non-finite pan
///   deltas count as `0.0`
#[must_use]
pub fn apply(
    current: ViewportState,
    gesture: GestureEvent,
    total_bars_count: usize,
) -> ViewportState {
    let zoom_factor = if gesture.zoom_factor.is_finite() && gesture.zoom_factor > 0.0 {
        gesture.zoom_factor
    } else {
        1.0
    };
    let pan_delta_x = if gesture.pan_delta_x.is_finite() {
        gesture.pan_delta_x
    } else {
        0.0
    };

    let lower = MIN_VISIBLE_BARS_COUNT.min(total_bars_count) as f64;
    let upper = total_bars_count as f64;
    let visible_bars_count = (current.visible_bars_count() as f64 / zoom_factor)
        .round()
        .clamp(lower, upper) as usize;

    let scrolled_by =
        (current.scrolled_by() + pan_delta_x).clamp(0.0, current.max_scroll(total_bars_count));

    trace!(
        zoom_factor,
        pan_delta_x, visible_bars_count, scrolled_by, "apply gesture"
    );

    current
        .with_visible_bars_count(visible_bars_count)
        .with_scrolled_by(scrolled_by)
}

/// Applies a surface resize to the viewport state.
///
/// Only the terminal width is replaced; the scroll offset is left as-is and
/// reclamped by the next pan tick.
#[must_use]
pub fn on_resize(current: ViewportState, new_width_px: f64) -> ViewportState {
    if !new_width_px.is_finite() {
        return current;
    }
    current.with_terminal_width(new_width_px.max(0.0))
}
