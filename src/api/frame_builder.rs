use tracing::trace;

use crate::core::{Bar, PriceScale, Viewport, ViewportState, project_candles};
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::render_style::RenderStyle;

/// Builds the draw primitives for one frame.
///
/// The price scale is computed first, from the bars currently in view, so
/// every candle in the frame shares one mapping. Candles are then projected
/// for the **whole** sequence and shifted by the scroll offset in a single
/// coordinate-space translation; off-surface candles rely on the backend's
/// clip. Three dashed reference lines (range top, latest close, range bottom)
/// and their right-aligned price labels stay in untranslated surface space.
///
/// An empty bar series, or a view with no bars in it, produces an empty frame
/// rather than an error.
pub fn build_render_frame(
    bars: &[Bar],
    viewport: ViewportState,
    surface: Viewport,
    style: RenderStyle,
) -> ChartResult<RenderFrame> {
    if !surface.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: surface.width,
            height: surface.height,
        });
    }

    let mut frame = RenderFrame::new(surface);

    let visible = viewport.visible_bars(bars);
    if visible.is_empty() || viewport.bar_width() <= 0.0 {
        trace!(total = bars.len(), "nothing in view, emitting empty frame");
        return Ok(frame);
    }

    let width = f64::from(surface.width);
    let height = f64::from(surface.height);
    let scale = PriceScale::from_bars(visible, height)?;

    // One shift for the whole candle pass; reference lines stay unshifted.
    let translate_x = viewport.scrolled_by();
    let body_stroke_width = viewport.bar_width() / 2.0;

    let candles = project_candles(bars, viewport, scale, width)?;
    for candle in candles {
        let x = candle.offset_x + translate_x;
        frame.lines.push(LinePrimitive::new(
            x,
            candle.wick_bottom_y,
            x,
            candle.wick_top_y,
            style.wick_width_px,
            style.wick_color,
        ));

        let body_color = if candle.is_bullish {
            style.bullish_color
        } else {
            style.bearish_color
        };
        frame.lines.push(LinePrimitive::new(
            x,
            candle.open_y,
            x,
            candle.close_y,
            body_stroke_width,
            body_color,
        ));
    }

    let (price_min, price_max) = scale.domain();
    push_reference_line(&mut frame, price_max, 0.0, width, style);

    // bars is non-empty here; index 0 is the latest bar.
    let last_close = bars[0].close;
    push_reference_line(
        &mut frame,
        last_close,
        scale.price_to_pixel(last_close)?,
        width,
        style,
    );
    push_reference_line(&mut frame, price_min, height, width, style);

    Ok(frame)
}

fn push_reference_line(
    frame: &mut RenderFrame,
    price: f64,
    y: f64,
    width: f64,
    style: RenderStyle,
) {
    frame.lines.push(
        LinePrimitive::new(
            0.0,
            y,
            width,
            y,
            style.reference_line_width_px,
            style.reference_line_color,
        )
        .with_stroke_style(style.reference_stroke_style),
    );
    frame.texts.push(TextPrimitive::new(
        format!("{price}"),
        width,
        y,
        style.label_font_size_px,
        style.label_color,
        TextHAlign::Right,
    ));
}
