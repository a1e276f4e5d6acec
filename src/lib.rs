//! terminal-chart: interactive candlestick viewport and renderer core.
//!
//! This crate owns the coordinate-transform math for a pannable, zoomable
//! candlestick chart: it keeps the viewport state, clamps gesture-driven
//! mutation, scales prices into pixel space, and emits backend-agnostic
//! draw primitives. Data retrieval, UI composition, and the drawing surface
//! itself are host concerns.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
