use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{Bar, PriceScale, ViewportState};
use crate::error::ChartResult;

/// Projected candle geometry in pixel coordinates.
///
/// X positions are pre-translation: the caller shifts the whole sequence by
/// the viewport scroll offset in one coordinate-space move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleGeometry {
    pub offset_x: f64,
    pub wick_top_y: f64,
    pub wick_bottom_y: f64,
    pub open_y: f64,
    pub close_y: f64,
    pub is_bullish: bool,
}

/// Projects every bar in the sequence into deterministic pixel geometry.
///
/// Index 0 (the most recent bar) sits at the right edge of the surface and
/// older bars march left. Bars beyond the viewport still project; the surface
/// clip discards them at draw time. The function is pure so it can back both
/// rendering and regression tests.
pub fn project_candles(
    bars: &[Bar],
    viewport: ViewportState,
    price_scale: PriceScale,
    surface_width_px: f64,
) -> ChartResult<Vec<CandleGeometry>> {
    let bar_width = viewport.bar_width();

    #[cfg(feature = "parallel-projection")]
    {
        let projected: Vec<ChartResult<CandleGeometry>> = bars
            .par_iter()
            .enumerate()
            .map(|(index, bar)| {
                project_single_candle(*bar, index, bar_width, price_scale, surface_width_px)
            })
            .collect();
        projected.into_iter().collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        let mut out = Vec::with_capacity(bars.len());
        for (index, bar) in bars.iter().enumerate() {
            out.push(project_single_candle(
                *bar,
                index,
                bar_width,
                price_scale,
                surface_width_px,
            )?);
        }
        Ok(out)
    }
}

fn project_single_candle(
    bar: Bar,
    index: usize,
    bar_width: f64,
    price_scale: PriceScale,
    surface_width_px: f64,
) -> ChartResult<CandleGeometry> {
    Ok(CandleGeometry {
        offset_x: surface_width_px - index as f64 * bar_width,
        wick_top_y: price_scale.price_to_pixel(bar.high)?,
        wick_bottom_y: price_scale.price_to_pixel(bar.low)?,
        open_y: price_scale.price_to_pixel(bar.open)?,
        close_y: price_scale.price_to_pixel(bar.close)?,
        is_bullish: bar.is_bullish(),
    })
}
