use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::{PlotArea, ScaleMode, TimeScale, TimeSeriesStore, ValueScale};
use crate::error::{ChartError, ChartResult};
use crate::render::PathPoint;

/// Owns the time and value mappings of the plot.
///
/// The value domain spans every series and every record so toggling
/// visibility never rescales the axis. Viewport changes only touch pixel
/// ranges; mode changes only touch the value mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleCoordinator {
    plot: PlotArea,
    time_scale: TimeScale,
    value_scale: ValueScale,
    max_value: f64,
}

impl ScaleCoordinator {
    pub fn new(store: &TimeSeriesStore, plot: PlotArea, mode: ScaleMode) -> ChartResult<Self> {
        if store.is_empty() {
            return Err(ChartError::EmptyDataSet);
        }
        let (start, end) = store.time_extent();
        let max_value = store.max_value();
        let time_scale = TimeScale::new(start, end, plot.width)?;
        let value_scale = ValueScale::new(mode, max_value, plot.height)?;
        debug!(
            max_value,
            width = plot.width,
            height = plot.height,
            ?mode,
            "built scales"
        );
        Ok(Self {
            plot,
            time_scale,
            value_scale,
            max_value,
        })
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn time_scale(&self) -> TimeScale {
        self.time_scale
    }

    #[must_use]
    pub fn value_scale(&self) -> ValueScale {
        self.value_scale
    }

    #[must_use]
    pub fn mode(&self) -> ScaleMode {
        self.value_scale.mode()
    }

    /// Replaces both pixel ranges, keeping every domain.
    pub fn set_plot_area(&mut self, plot: PlotArea) -> ChartResult<()> {
        let time_scale = self.time_scale.with_width(plot.width)?;
        let value_scale = self.value_scale.with_height(plot.height)?;
        self.plot = plot;
        self.time_scale = time_scale;
        self.value_scale = value_scale;
        Ok(())
    }

    /// Rebuilds the value mapping for `mode`; the time mapping is untouched.
    pub fn set_mode(&mut self, mode: ScaleMode) -> ChartResult<()> {
        self.value_scale = ValueScale::new(mode, self.max_value, self.plot.height)?;
        Ok(())
    }

    #[must_use]
    pub fn time_at(&self, x: f64) -> DateTime<Utc> {
        self.time_scale.pixel_to_time(x)
    }

    #[must_use]
    pub fn project(&self, time: DateTime<Utc>, value: f64) -> PathPoint {
        PathPoint {
            x: self.time_scale.time_to_pixel(time),
            y: self.value_scale.value_to_pixel(value),
        }
    }
}
