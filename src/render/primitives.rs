use serde::{Deserialize, Serialize};

use crate::core::{ScaleMode, SeriesId};
use crate::error::{ChartError, ChartResult};

pub use crate::core::Color;

fn validate_opacity(opacity: f64, what: &str) -> ChartResult<()> {
    if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
        return Err(ChartError::InvalidData(format!(
            "{what} opacity must be finite and in [0, 1]"
        )));
    }
    Ok(())
}

fn validate_point(x: f64, y: f64, what: &str) -> ChartResult<()> {
    if !x.is_finite() || !y.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "{what} coordinates must be finite"
        )));
    }
    Ok(())
}

/// One vertex of a series polyline in plot pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

/// Full polyline of one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPathRequest {
    pub series: SeriesId,
    pub color: Color,
    pub points: Vec<PathPoint>,
    pub opacity: f64,
}

/// Opacity update for one series line, emitted by visibility transitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesVisibilityRequest {
    pub series: SeriesId,
    pub visible: bool,
    pub opacity: f64,
}

/// Hover marker of one series; `position` is `None` while nothing is hovered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerRequest {
    pub series: SeriesId,
    pub color: Color,
    pub position: Option<PathPoint>,
    pub opacity: f64,
}

/// One tooltip line: series, formatted value and swatch color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipEntry {
    pub series: SeriesId,
    pub label: String,
    pub value: f64,
    pub formatted_value: String,
    pub color: Color,
}

/// Tooltip body: a date title, the baseline header line and the ranked body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub title: String,
    pub header: TooltipEntry,
    pub body: Vec<TooltipEntry>,
}

impl TooltipContent {
    /// Header first, then the body in display order.
    pub fn entries(&self) -> impl Iterator<Item = &TooltipEntry> + '_ {
        std::iter::once(&self.header).chain(self.body.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipRequest {
    pub x: f64,
    pub y: f64,
    pub content: Option<TooltipContent>,
    pub visible: bool,
}

/// Vertical guide line following the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideLineRequest {
    pub x: f64,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisKind {
    /// Bottom axis; domain in unix seconds.
    Time,
    /// Left axis; domain in data units.
    Value(ScaleMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRequest {
    pub kind: AxisKind,
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendEntryRequest {
    pub series: SeriesId,
    pub opacity: f64,
}

/// Pointer-tracking overlay covering the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayRequest {
    pub width: f64,
    pub height: f64,
}

/// Draw instruction handed to the rendering façade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawRequest {
    SeriesPath(SeriesPathRequest),
    SeriesVisibility(SeriesVisibilityRequest),
    Marker(MarkerRequest),
    Tooltip(TooltipRequest),
    GuideLine(GuideLineRequest),
    Axis(AxisRequest),
    LegendEntry(LegendEntryRequest),
    Overlay(OverlayRequest),
}

impl DrawRequest {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::SeriesPath(path) => {
                validate_opacity(path.opacity, "series path")?;
                for point in &path.points {
                    validate_point(point.x, point.y, "series path")?;
                }
                path.color.validate()
            }
            Self::SeriesVisibility(update) => validate_opacity(update.opacity, "series"),
            Self::Marker(marker) => {
                validate_opacity(marker.opacity, "marker")?;
                match marker.position {
                    Some(point) => validate_point(point.x, point.y, "marker")?,
                    None if marker.opacity > 0.0 => {
                        return Err(ChartError::InvalidData(
                            "visible marker must carry a position".to_owned(),
                        ));
                    }
                    None => {}
                }
                marker.color.validate()
            }
            Self::Tooltip(tooltip) => {
                validate_point(tooltip.x, tooltip.y, "tooltip")?;
                if tooltip.visible && tooltip.content.is_none() {
                    return Err(ChartError::InvalidData(
                        "visible tooltip must carry content".to_owned(),
                    ));
                }
                Ok(())
            }
            Self::GuideLine(line) => validate_point(line.x, 0.0, "guide line"),
            Self::Axis(axis) => {
                validate_point(axis.domain.0, axis.domain.1, "axis domain")?;
                validate_point(axis.range.0, axis.range.1, "axis range")
            }
            Self::LegendEntry(entry) => validate_opacity(entry.opacity, "legend entry"),
            Self::Overlay(overlay) => {
                if !overlay.width.is_finite()
                    || !overlay.height.is_finite()
                    || overlay.width <= 0.0
                    || overlay.height <= 0.0
                {
                    return Err(ChartError::InvalidData(
                        "overlay size must be finite and > 0".to_owned(),
                    ));
                }
                Ok(())
            }
        }
    }
}
