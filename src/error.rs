use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("no bars in visible range")]
    EmptyVisibleRange,

    #[error("degenerate price scale: min={price_min}, max={price_max}")]
    DegenerateScale { price_min: f64, price_max: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
