use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, ScaleMode, Viewport};
use crate::error::{ChartError, ChartResult};

use super::tooltip::{DEFAULT_TOP_K, DisplayMode};
use super::validation::{validate_dimmed_opacity, validate_margins, validate_top_k};

pub const DEFAULT_DIMMED_OPACITY: f64 = 0.1;

/// Space reserved around the plot for axes, labels and the legend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            top: 50.0,
            right: 30.0,
            bottom: 175.0,
            left: 150.0,
        }
    }
}

impl PlotMargins {
    #[must_use]
    pub fn zero() -> Self {
        Self {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        }
    }

    /// Plot area inside `viewport`, failing when nothing drawable remains.
    pub fn plot_area(self, viewport: Viewport) -> ChartResult<PlotArea> {
        let area = PlotArea::new(
            f64::from(viewport.width) - self.left - self.right,
            f64::from(viewport.height) - self.top - self.bottom,
        );
        if !viewport.is_valid() || !area.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(area)
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can ship chart setup as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: PlotMargins,
    #[serde(default)]
    pub scale_mode: ScaleMode,
    #[serde(default)]
    pub display_mode: DisplayMode,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default = "default_dimmed_opacity")]
    pub dimmed_opacity: f64,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: PlotMargins::default(),
            scale_mode: ScaleMode::default(),
            display_mode: DisplayMode::default(),
            top_k: DEFAULT_TOP_K,
            dimmed_opacity: DEFAULT_DIMMED_OPACITY,
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: PlotMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_scale_mode(mut self, scale_mode: ScaleMode) -> Self {
        self.scale_mode = scale_mode;
        self
    }

    #[must_use]
    pub fn with_display_mode(mut self, display_mode: DisplayMode) -> Self {
        self.display_mode = display_mode;
        self
    }

    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    #[must_use]
    pub fn with_dimmed_opacity(mut self, dimmed_opacity: f64) -> Self {
        self.dimmed_opacity = dimmed_opacity;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        validate_margins(self.margins)?;
        self.margins.plot_area(self.viewport)?;
        validate_top_k(self.top_k)?;
        validate_dimmed_opacity(self.dimmed_opacity)?;
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart config json: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config json: {e}"))
        })
    }
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_dimmed_opacity() -> f64 {
    DEFAULT_DIMMED_OPACITY
}
