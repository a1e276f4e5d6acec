mod data_controller;
mod engine;
mod engine_config;
mod frame_builder;
mod render_style;

pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use frame_builder::build_render_frame;
pub use render_style::RenderStyle;
