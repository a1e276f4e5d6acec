use serde::{Deserialize, Serialize};

use crate::core::Bar;

/// Fewest bars a zoom gesture may leave in view.
pub const MIN_VISIBLE_BARS_COUNT: usize = 20;

/// Authoritative view window over the bar sequence.
///
/// The state is a plain value record replaced wholesale on each gesture or
/// resize event; `bar_width` and the visible subsequence are derived rather
/// than stored. Exactly one writer mutates it per chart session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    visible_bars_count: usize,
    scrolled_by: f64,
    terminal_width: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            visible_bars_count: MIN_VISIBLE_BARS_COUNT,
            scrolled_by: 0.0,
            terminal_width: 0.0,
        }
    }
}

impl ViewportState {
    /// Creates a fresh state at the given zoom level.
    ///
    /// `terminal_width` stays 0 until the host reports the real surface size.
    #[must_use]
    pub fn new(visible_bars_count: usize) -> Self {
        Self {
            visible_bars_count: visible_bars_count.max(MIN_VISIBLE_BARS_COUNT),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn visible_bars_count(self) -> usize {
        self.visible_bars_count
    }

    #[must_use]
    pub fn scrolled_by(self) -> f64 {
        self.scrolled_by
    }

    #[must_use]
    pub fn terminal_width(self) -> f64 {
        self.terminal_width
    }

    /// Pixel width allotted per bar at the current zoom level.
    #[must_use]
    pub fn bar_width(self) -> f64 {
        if self.visible_bars_count == 0 {
            return 0.0;
        }
        self.terminal_width / self.visible_bars_count as f64
    }

    #[must_use]
    pub fn with_visible_bars_count(self, visible_bars_count: usize) -> Self {
        Self {
            visible_bars_count,
            ..self
        }
    }

    #[must_use]
    pub fn with_scrolled_by(self, scrolled_by: f64) -> Self {
        Self {
            scrolled_by,
            ..self
        }
    }

    #[must_use]
    pub fn with_terminal_width(self, terminal_width: f64) -> Self {
        Self {
            terminal_width,
            ..self
        }
    }

    /// Upper clamp for the scroll offset.
    ///
    /// Collapses to 0 when the full sequence is narrower than the surface.
    #[must_use]
    pub fn max_scroll(self, total_bars_count: usize) -> f64 {
        (total_bars_count as f64 * self.bar_width() - self.terminal_width).max(0.0)
    }

    /// The subsequence of `bars` currently in view, derived from the scroll
    /// offset and zoom level.
    #[must_use]
    pub fn visible_bars(self, bars: &[Bar]) -> &[Bar] {
        let bar_width = self.bar_width();
        let start = if bar_width.is_finite() && bar_width > 0.0 {
            ((self.scrolled_by / bar_width).round().max(0.0) as usize).min(bars.len())
        } else {
            0
        };
        let end = start.saturating_add(self.visible_bars_count).min(bars.len());
        &bars[start..end]
    }
}
