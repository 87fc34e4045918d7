mod engine;
mod engine_config;
mod engine_snapshot;
mod events;
mod frame_builder;
mod interaction_controller;
mod json_contract;
mod label_format;
mod layout_controller;
mod scale_coordinator;
mod snapshot_controller;
mod tooltip;
mod validation;

pub use engine::ChartEngine;
pub use engine_config::{ChartEngineConfig, DEFAULT_DIMMED_OPACITY, PlotMargins};
pub use engine_snapshot::EngineSnapshot;
pub use events::ChartEvent;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use label_format::{format_count, format_month_year};
pub use scale_coordinator::ScaleCoordinator;
pub use tooltip::{DEFAULT_TOP_K, DisplayMode, TooltipContentBuilder};
