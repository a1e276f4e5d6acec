use tracing::{debug, trace};

use crate::core::{Bar, Viewport, ViewportState};
use crate::interaction::{self, GestureEvent};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Replaces the bar series wholesale.
    ///
    /// The sequence is most-recent-first and there is no incremental append
    /// protocol; a data refresh swaps the entire list and resets the viewport
    /// to its bootstrap zoom and scroll.
    pub fn set_bars(&mut self, bars: Vec<Bar>) {
        debug!(count = bars.len(), "set bars");
        self.bars = bars;
        self.viewport_state = interaction::on_resize(
            ViewportState::new(self.config.initial_visible_bars_count),
            f64::from(self.surface.width),
        );
    }

    /// Applies one pan/zoom tick from the host's gesture recognizer.
    pub fn on_gesture(&mut self, gesture: GestureEvent) {
        self.viewport_state = interaction::apply(self.viewport_state, gesture, self.bars.len());
    }

    /// Applies a host layout/resize notification.
    ///
    /// The scroll offset is intentionally left unclamped here; the next pan
    /// tick reclamps against the new width.
    pub fn on_resize(&mut self, surface: Viewport) {
        trace!(
            width = surface.width,
            height = surface.height,
            "resize surface"
        );
        self.surface = surface;
        self.viewport_state =
            interaction::on_resize(self.viewport_state, f64::from(surface.width));
    }
}
