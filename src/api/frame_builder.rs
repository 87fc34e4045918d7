use crate::core::SeriesId;
use crate::error::ChartResult;
use crate::interaction::VisibilityChange;
use crate::render::{
    AxisKind, AxisRequest, DrawRequest, GuideLineRequest, LegendEntryRequest, MarkerRequest,
    OverlayRequest, RenderFrame, Renderer, SeriesPathRequest, SeriesVisibilityRequest,
    TooltipRequest,
};

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Full scene: every path, both axes, legend, overlay and the hover layer.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.config.viewport);
        self.push_series_paths(&mut frame);
        self.push_axes(&mut frame);
        self.push_legend_entries(&mut frame);
        self.push_overlay(&mut frame);
        self.push_hover_layer(&mut frame);
        frame.validate()?;
        Ok(frame)
    }

    pub(super) fn series_opacity(&self, series: SeriesId) -> f64 {
        if self.visibility.state().is_shown(series) {
            1.0
        } else {
            self.config.dimmed_opacity
        }
    }

    /// Paths for every series, hidden ones included, so un-dimming needs no recompute.
    pub(super) fn push_series_paths(&self, frame: &mut RenderFrame) {
        for (series, descriptor) in self.store.catalog().iter() {
            let points = self
                .store
                .series_values(series)
                .map(|(time, value)| self.scales.project(time, value))
                .collect();
            frame.push(DrawRequest::SeriesPath(SeriesPathRequest {
                series,
                color: descriptor.color,
                points,
                opacity: self.series_opacity(series),
            }));
        }
    }

    /// One opacity update per change emitted by a visibility transition.
    pub(super) fn push_visibility_updates(
        &self,
        frame: &mut RenderFrame,
        changes: &[VisibilityChange],
    ) {
        for change in changes {
            let opacity = if change.visible {
                1.0
            } else {
                self.config.dimmed_opacity
            };
            frame.push(DrawRequest::SeriesVisibility(SeriesVisibilityRequest {
                series: change.series,
                visible: change.visible,
                opacity,
            }));
        }
    }

    pub(super) fn push_legend_entries(&self, frame: &mut RenderFrame) {
        for series in self.store.catalog().ids() {
            frame.push(DrawRequest::LegendEntry(LegendEntryRequest {
                series,
                opacity: self.series_opacity(series),
            }));
        }
    }

    pub(super) fn push_axes(&self, frame: &mut RenderFrame) {
        let time_scale = self.scales.time_scale();
        let value_scale = self.scales.value_scale();
        frame.push(DrawRequest::Axis(AxisRequest {
            kind: AxisKind::Time,
            domain: time_scale.domain_seconds(),
            range: time_scale.range(),
        }));
        frame.push(DrawRequest::Axis(AxisRequest {
            kind: AxisKind::Value(value_scale.mode()),
            domain: value_scale.domain(),
            range: value_scale.range(),
        }));
    }

    pub(super) fn push_overlay(&self, frame: &mut RenderFrame) {
        let plot = self.scales.plot_area();
        frame.push(DrawRequest::Overlay(OverlayRequest {
            width: plot.width,
            height: plot.height,
        }));
    }

    /// Markers, tooltip and guide line for the hovered record, or their hidden
    /// variants when nothing is hovered.
    pub(super) fn push_hover_layer(&self, frame: &mut RenderFrame) {
        let (pointer_x, pointer_y) = self.pointer.position();
        let hovered = self.hovered_record();
        let state = self.visibility.state();

        for (series, descriptor) in self.store.catalog().iter() {
            let (position, opacity) = match hovered {
                Some(record) => {
                    let point = self.scales.project(record.timestamp, record.value(series));
                    let opacity = if state.is_shown(series) { 1.0 } else { 0.0 };
                    (Some(point), opacity)
                }
                None => (None, 0.0),
            };
            frame.push(DrawRequest::Marker(MarkerRequest {
                series,
                color: descriptor.color,
                position,
                opacity,
            }));
        }

        let content = self.tooltip_content();
        frame.push(DrawRequest::Tooltip(TooltipRequest {
            x: pointer_x,
            y: pointer_y,
            visible: content.is_some(),
            content,
        }));
        frame.push(DrawRequest::GuideLine(GuideLineRequest {
            x: pointer_x,
            visible: hovered.is_some(),
        }));
    }
}
