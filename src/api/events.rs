use serde::{Deserialize, Serialize};

use crate::core::ScaleMode;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartEngine, DisplayMode};

/// Input forwarded by the rendering façade.
///
/// Pointer coordinates are in plot-area pixels (origin at the top-left of
/// the pointer-tracking overlay).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ChartEvent {
    PointerMove { x: f64, y: f64 },
    PointerEnter,
    PointerLeave,
    LegendClick { series: String },
    Resize { width: u32, height: u32 },
    ScaleModeChange { mode: ScaleMode },
    DisplayModeChange { mode: DisplayMode },
}

impl<R: Renderer> ChartEngine<R> {
    /// Handles one event to completion.
    pub fn dispatch(&mut self, event: &ChartEvent) -> ChartResult<()> {
        match event {
            ChartEvent::PointerMove { x, y } => self.pointer_move(*x, *y),
            ChartEvent::PointerEnter => self.pointer_enter(),
            ChartEvent::PointerLeave => self.pointer_leave(),
            ChartEvent::LegendClick { series } => self.legend_click(series),
            ChartEvent::Resize { width, height } => self.resize(*width, *height),
            ChartEvent::ScaleModeChange { mode } => self.set_scale_mode(*mode),
            ChartEvent::DisplayModeChange { mode } => self.set_display_mode(*mode),
        }
    }
}
