use tracing::debug;

use crate::core::{ScaleMode, Viewport};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Applies a new outer size.
    ///
    /// Pixel ranges follow the new plot area while domains, focus and
    /// per-series flags stay as they are. Any pointer highlight is dropped
    /// until the next move.
    pub fn resize(&mut self, width: u32, height: u32) -> ChartResult<()> {
        let viewport = Viewport::new(width, height);
        let plot = self.config.margins.plot_area(viewport)?;
        self.scales.set_plot_area(plot)?;
        self.config.viewport = viewport;
        self.pointer.clear_hover();
        debug!(width, height, plot_width = plot.width, plot_height = plot.height, "resize");

        let frame = self.build_render_frame()?;
        self.emit(frame)
    }

    /// Rebuilds the value mapping for `mode` and redraws every series path.
    ///
    /// The time mapping and all visibility state are left untouched; the
    /// hovered record is cleared because marker positions are stale.
    pub fn set_scale_mode(&mut self, mode: ScaleMode) -> ChartResult<()> {
        self.scales.set_mode(mode)?;
        self.config.scale_mode = mode;
        self.pointer.clear_hover();
        debug!(?mode, "scale mode change");

        let mut frame = RenderFrame::new(self.config.viewport);
        self.push_series_paths(&mut frame);
        self.push_axes(&mut frame);
        self.push_hover_layer(&mut frame);
        self.emit(frame)
    }

    #[must_use]
    pub fn scale_mode(&self) -> ScaleMode {
        self.scales.mode()
    }
}
