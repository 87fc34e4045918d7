use tracing::{debug, trace};

use crate::core::SeriesId;
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::validation::validate_pointer;
use super::{ChartEngine, DisplayMode};

impl<R: Renderer> ChartEngine<R> {
    /// Resolves the record under plot-space `x` and repaints the hover layer.
    ///
    /// Positions outside the plot clamp to the first or last record; the
    /// tooltip and guide line still follow the raw pointer.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        validate_pointer(x, y)?;
        let width = self.scales.plot_area().width;
        let query = self.scales.time_at(x.clamp(0.0, width));
        let Some(index) = self.resolve_index(query) else {
            return Ok(());
        };
        self.pointer.on_pointer_move(x, y, index);
        trace!(x, index, "pointer move");

        let mut frame = RenderFrame::new(self.config.viewport);
        self.push_hover_layer(&mut frame);
        self.emit(frame)
    }

    pub fn pointer_enter(&mut self) -> ChartResult<()> {
        self.pointer.on_pointer_enter();
        trace!("pointer enter");

        let mut frame = RenderFrame::new(self.config.viewport);
        self.push_hover_layer(&mut frame);
        self.emit(frame)
    }

    /// Hides tooltip, guide line and markers.
    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        self.pointer.on_pointer_leave();
        trace!("pointer leave");

        let mut frame = RenderFrame::new(self.config.viewport);
        self.push_hover_layer(&mut frame);
        self.emit(frame)
    }

    /// Legend click by series key.
    pub fn legend_click(&mut self, key: &str) -> ChartResult<()> {
        let series = self.store.catalog().resolve(key)?;
        self.legend_click_series(series)
    }

    /// Runs one visibility transition and repaints opacities plus the tooltip
    /// of the hovered record, whose content depends on focus.
    pub fn legend_click_series(&mut self, series: SeriesId) -> ChartResult<()> {
        let changes = self.visibility.click(series)?;
        debug!(
            series = self.store.catalog().key(series),
            focus = ?self.visibility.state().focus(),
            changed = changes.len(),
            "legend click"
        );

        let mut frame = RenderFrame::new(self.config.viewport);
        self.push_visibility_updates(&mut frame, &changes);
        self.push_legend_entries(&mut frame);
        self.push_hover_layer(&mut frame);
        self.emit(frame)
    }

    /// Switches tooltip detail and rebuilds the tooltip of the hovered record.
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> ChartResult<()> {
        self.config.display_mode = mode;
        debug!(?mode, "display mode change");

        let mut frame = RenderFrame::new(self.config.viewport);
        self.push_hover_layer(&mut frame);
        self.emit(frame)
    }
}
