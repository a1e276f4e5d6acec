pub mod bar;
pub mod candlestick;
pub mod price_scale;
pub mod primitives;
pub mod types;
pub mod viewport;

pub use bar::Bar;
pub use candlestick::{CandleGeometry, project_candles};
pub use price_scale::{MIN_PRICE_SPAN, PriceScale};
pub use types::Viewport;
pub use viewport::{MIN_VISIBLE_BARS_COUNT, ViewportState};
