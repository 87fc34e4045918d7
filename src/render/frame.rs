use serde::{Deserialize, Serialize};

use crate::core::{SeriesId, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    AxisRequest, DrawRequest, GuideLineRequest, LegendEntryRequest, MarkerRequest,
    OverlayRequest, SeriesPathRequest, SeriesVisibilityRequest, TooltipRequest,
};

/// Every draw request produced by one handled event.
///
/// Requests are computed from a single state snapshot and handed to the
/// renderer together, so a frame never mixes pre- and post-event state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub requests: Vec<DrawRequest>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            requests: Vec::new(),
        }
    }

    pub fn push(&mut self, request: DrawRequest) {
        self.requests.push(request);
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for request in &self.requests {
            request.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn series_paths(&self) -> impl Iterator<Item = &SeriesPathRequest> + '_ {
        self.requests.iter().filter_map(|request| match request {
            DrawRequest::SeriesPath(path) => Some(path),
            _ => None,
        })
    }

    pub fn series_visibility(&self) -> impl Iterator<Item = &SeriesVisibilityRequest> + '_ {
        self.requests.iter().filter_map(|request| match request {
            DrawRequest::SeriesVisibility(update) => Some(update),
            _ => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = &MarkerRequest> + '_ {
        self.requests.iter().filter_map(|request| match request {
            DrawRequest::Marker(marker) => Some(marker),
            _ => None,
        })
    }

    pub fn legend_entries(&self) -> impl Iterator<Item = &LegendEntryRequest> + '_ {
        self.requests.iter().filter_map(|request| match request {
            DrawRequest::LegendEntry(entry) => Some(entry),
            _ => None,
        })
    }

    pub fn axes(&self) -> impl Iterator<Item = &AxisRequest> + '_ {
        self.requests.iter().filter_map(|request| match request {
            DrawRequest::Axis(axis) => Some(axis),
            _ => None,
        })
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipRequest> {
        self.requests.iter().find_map(|request| match request {
            DrawRequest::Tooltip(tooltip) => Some(tooltip),
            _ => None,
        })
    }

    #[must_use]
    pub fn guide_line(&self) -> Option<GuideLineRequest> {
        self.requests.iter().find_map(|request| match request {
            DrawRequest::GuideLine(line) => Some(*line),
            _ => None,
        })
    }

    #[must_use]
    pub fn overlay(&self) -> Option<OverlayRequest> {
        self.requests.iter().find_map(|request| match request {
            DrawRequest::Overlay(overlay) => Some(*overlay),
            _ => None,
        })
    }

    #[must_use]
    pub fn series_path(&self, series: SeriesId) -> Option<&SeriesPathRequest> {
        self.series_paths().find(|path| path.series == series)
    }

    #[must_use]
    pub fn marker(&self, series: SeriesId) -> Option<&MarkerRequest> {
        self.markers().find(|marker| marker.series == series)
    }
}
