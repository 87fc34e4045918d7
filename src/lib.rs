//! mortality-chart: headless interaction core for a multi-series time-series chart.
//!
//! The crate keeps pointer exploration, per-series visibility, tooltip content
//! and axis scaling mutually consistent. Drawing is delegated to a
//! [`render::Renderer`] that receives one [`render::RenderFrame`] per handled
//! event.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartEvent};
pub use error::{ChartError, ChartResult};
