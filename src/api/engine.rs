use tracing::warn;

use crate::core::{Bar, Viewport, ViewportState};
use crate::error::ChartResult;
use crate::interaction;
use crate::render::{RenderFrame, Renderer};

use super::frame_builder::build_render_frame;
use super::render_style::{RenderStyle, validate_render_style};
use super::ChartEngineConfig;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` coordinates the bar series, viewport state, render style,
/// and renderer calls. One engine serves one chart session; the host
/// serializes gesture, resize, and data events onto a single thread and
/// schedules a re-render after each state change.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) bars: Vec<Bar>,
    pub(super) viewport_state: ViewportState,
    pub(super) surface: Viewport,
    pub(super) style: RenderStyle,
    pub(super) config: ChartEngineConfig,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        let viewport_state = interaction::on_resize(
            ViewportState::new(config.initial_visible_bars_count),
            f64::from(config.viewport.width),
        );
        Ok(Self {
            renderer,
            bars: Vec::new(),
            viewport_state,
            surface: config.viewport,
            style: RenderStyle::default(),
            config,
        })
    }

    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    #[must_use]
    pub fn viewport_state(&self) -> ViewportState {
        self.viewport_state
    }

    #[must_use]
    pub fn surface(&self) -> Viewport {
        self.surface
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        validate_render_style(style)?;
        self.style = style;
        Ok(())
    }

    /// Builds the draw primitives for the current state without rendering.
    pub fn build_frame(&self) -> ChartResult<RenderFrame> {
        build_render_frame(&self.bars, self.viewport_state, self.surface, self.style)
    }

    /// Renders the current frame through the attached backend.
    ///
    /// A zero-sized surface skips the frame instead of failing; the host has
    /// simply not reported a layout yet.
    pub fn render(&mut self) -> ChartResult<()> {
        if !self.surface.is_valid() {
            warn!(
                width = self.surface.width,
                height = self.surface.height,
                "skipping render on zero-sized surface"
            );
            return Ok(());
        }
        let frame = self.build_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
