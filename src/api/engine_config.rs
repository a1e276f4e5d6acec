use serde::{Deserialize, Serialize};

use crate::core::{MIN_VISIBLE_BARS_COUNT, Viewport};
use crate::error::{ChartError, ChartResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. The viewport may be zero-sized
/// at bootstrap; the host reports the real surface size through
/// [`super::ChartEngine::on_resize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default = "default_initial_visible_bars_count")]
    pub initial_visible_bars_count: usize,
}

fn default_initial_visible_bars_count() -> usize {
    MIN_VISIBLE_BARS_COUNT
}

impl ChartEngineConfig {
    /// Creates a config at the default zoom level.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            initial_visible_bars_count: default_initial_visible_bars_count(),
        }
    }

    #[must_use]
    pub fn with_initial_visible_bars_count(mut self, count: usize) -> Self {
        self.initial_visible_bars_count = count;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.initial_visible_bars_count < MIN_VISIBLE_BARS_COUNT {
            return Err(ChartError::InvalidData(format!(
                "initial visible bars count must be >= {MIN_VISIBLE_BARS_COUNT}"
            )));
        }
        Ok(())
    }

    /// Parses a config from its JSON representation.
    pub fn from_json(payload: &str) -> ChartResult<Self> {
        serde_json::from_str(payload)
            .map_err(|err| ChartError::InvalidData(format!("config json: {err}")))
    }

    /// Serializes the config to JSON.
    pub fn to_json(self) -> ChartResult<String> {
        serde_json::to_string(&self)
            .map_err(|err| ChartError::InvalidData(format!("config json: {err}")))
    }
}
