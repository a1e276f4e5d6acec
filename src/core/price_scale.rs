use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::Bar;
use crate::error::{ChartError, ChartResult};

/// Narrowest price span the autoscale path will map onto the surface.
///
/// A flat visible range is widened to this span instead of dividing by zero.
pub const MIN_PRICE_SPAN: f64 = 0.000_001;

/// Linear price-to-pixel mapping for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScale {
    price_min: f64,
    price_max: f64,
    height_px: f64,
    px_per_point: f64,
}

impl PriceScale {
    /// Creates a scale from an explicit price domain.
    pub fn new(price_min: f64, price_max: f64, height_px: f64) -> ChartResult<Self> {
        if !price_min.is_finite() || !price_max.is_finite() {
            return Err(ChartError::InvalidData(
                "price domain must be finite".to_owned(),
            ));
        }
        if price_min == price_max {
            return Err(ChartError::DegenerateScale {
                price_min,
                price_max,
            });
        }
        if !height_px.is_finite() || height_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "scale height must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            price_min,
            price_max,
            height_px,
            px_per_point: height_px / (price_max - price_min),
        })
    }

    /// Autoscales to the high/low envelope of the bars in view.
    ///
    /// A flat envelope is widened symmetrically to [`MIN_PRICE_SPAN`] so the
    /// mapping stays finite.
    pub fn from_bars(visible_bars: &[Bar], height_px: f64) -> ChartResult<Self> {
        let price_max = visible_bars
            .iter()
            .map(|bar| OrderedFloat(bar.high))
            .max()
            .ok_or(ChartError::EmptyVisibleRange)?
            .into_inner();
        let price_min = visible_bars
            .iter()
            .map(|bar| OrderedFloat(bar.low))
            .min()
            .ok_or(ChartError::EmptyVisibleRange)?
            .into_inner();

        if price_max - price_min < MIN_PRICE_SPAN {
            let mid = (price_max + price_min) * 0.5;
            return Self::new(mid - MIN_PRICE_SPAN * 0.5, mid + MIN_PRICE_SPAN * 0.5, height_px);
        }
        Self::new(price_min, price_max, height_px)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.price_min, self.price_max)
    }

    #[must_use]
    pub fn px_per_point(self) -> f64 {
        self.px_per_point
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        self.height_px
    }

    /// Maps a price to pixel Y.
    ///
    /// Pixel origin is top-left; higher prices map to smaller Y.
    pub fn price_to_pixel(self, price: f64) -> ChartResult<f64> {
        if !price.is_finite() {
            return Err(ChartError::InvalidData("price must be finite".to_owned()));
        }
        Ok(self.height_px - (price - self.price_min) * self.px_per_point)
    }
}
