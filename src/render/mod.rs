mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    AxisKind, AxisRequest, Color, DrawRequest, GuideLineRequest, LegendEntryRequest,
    MarkerRequest, OverlayRequest, PathPoint, SeriesPathRequest, SeriesVisibilityRequest,
    TooltipContent, TooltipEntry, TooltipRequest,
};

use crate::error::ChartResult;

/// Contract implemented by the rendering façade.
///
/// The engine hands over one fully materialized `RenderFrame` per handled
/// event, so painting code stays isolated from interaction state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
