use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineStrokeStyle};

/// Style contract for the current render frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub wick_color: Color,
    pub bullish_color: Color,
    pub bearish_color: Color,
    pub reference_line_color: Color,
    pub label_color: Color,
    pub label_font_size_px: f64,
    pub wick_width_px: f64,
    pub reference_line_width_px: f64,
    pub reference_stroke_style: LineStrokeStyle,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            wick_color: Color::rgb(1.0, 1.0, 1.0),
            bullish_color: Color::rgb(0.0, 1.0, 0.0),
            bearish_color: Color::rgb(1.0, 0.0, 0.0),
            reference_line_color: Color::rgb(1.0, 1.0, 1.0),
            label_color: Color::rgb(1.0, 1.0, 1.0),
            label_font_size_px: 12.0,
            wick_width_px: 1.0,
            reference_line_width_px: 1.0,
            reference_stroke_style: LineStrokeStyle::Dashed {
                on_px: 4.0,
                off_px: 4.0,
            },
        }
    }
}

pub(super) fn validate_render_style(style: RenderStyle) -> ChartResult<()> {
    style.wick_color.validate()?;
    style.bullish_color.validate()?;
    style.bearish_color.validate()?;
    style.reference_line_color.validate()?;
    style.label_color.validate()?;
    style.reference_stroke_style.validate()?;

    for (field, value) in [
        ("label_font_size_px", style.label_font_size_px),
        ("wick_width_px", style.wick_width_px),
        ("reference_line_width_px", style.reference_line_width_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style `{field}` must be finite and > 0"
            )));
        }
    }

    Ok(())
}
