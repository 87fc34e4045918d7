use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, ScaleMode, Viewport};

use super::DisplayMode;

/// Serializable view of the session state used by regression tests and tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub plot_area: PlotArea,
    pub scale_mode: ScaleMode,
    pub display_mode: DisplayMode,
    pub top_k: usize,
    pub focused_series: Option<String>,
    /// Stored per-series flags keyed by series key, in catalog order.
    pub visibility: IndexMap<String, bool>,
    pub hovered_index: Option<usize>,
    /// Time domain in unix seconds.
    pub time_domain: (f64, f64),
    pub value_domain: (f64, f64),
    pub record_count: usize,
}
