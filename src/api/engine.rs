use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::{NearestPointResolver, Record, SeriesId, TimeSeriesStore, Viewport};
use crate::error::ChartResult;
use crate::interaction::{PointerState, VisibilityState, VisibilityStateMachine};
use crate::render::{RenderFrame, Renderer, TooltipContent};

use super::{ChartEngineConfig, DisplayMode, ScaleCoordinator, TooltipContentBuilder};

/// Context object for one chart session.
///
/// `ChartEngine` owns the record store, the scales, the visibility state
/// machine and pointer tracking. Each handler runs to completion, derives one
/// [`RenderFrame`] from the resulting state and hands it to the renderer.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) store: TimeSeriesStore,
    pub(super) scales: ScaleCoordinator,
    pub(super) visibility: VisibilityStateMachine,
    pub(super) pointer: PointerState,
}

impl<R: Renderer> ChartEngine<R> {
    /// Validates `config` and builds scales over `store`.
    pub fn new(renderer: R, config: ChartEngineConfig, store: TimeSeriesStore) -> ChartResult<Self> {
        let config = config.validate()?;
        let plot = config.margins.plot_area(config.viewport)?;
        let scales = ScaleCoordinator::new(&store, plot, config.scale_mode)?;
        let visibility = VisibilityStateMachine::new(store.catalog().len());
        debug!(
            records = store.len(),
            series = store.catalog().len(),
            "chart engine initialized"
        );

        Ok(Self {
            renderer,
            config,
            store,
            scales,
            visibility,
            pointer: PointerState::default(),
        })
    }

    /// Paints the full scene.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.emit(frame)
    }

    pub(super) fn emit(&mut self, frame: RenderFrame) -> ChartResult<()> {
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn store(&self) -> &TimeSeriesStore {
        &self.store
    }

    #[must_use]
    pub fn scales(&self) -> &ScaleCoordinator {
        &self.scales
    }

    #[must_use]
    pub fn visibility(&self) -> &VisibilityState {
        self.visibility.state()
    }

    #[must_use]
    pub fn focused_series(&self) -> Option<SeriesId> {
        self.visibility.state().focused_series()
    }

    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.config.display_mode
    }

    #[must_use]
    pub fn pointer_state(&self) -> PointerState {
        self.pointer
    }

    #[must_use]
    pub fn hovered_index(&self) -> Option<usize> {
        self.pointer.hovered()
    }

    #[must_use]
    pub fn hovered_record(&self) -> Option<&Record> {
        self.pointer.hovered().and_then(|index| self.store.get(index))
    }

    /// Index of the record a pointer at `time` resolves to.
    #[must_use]
    pub fn resolve_index(&self, time: DateTime<Utc>) -> Option<usize> {
        NearestPointResolver::new(&self.store).resolve(time)
    }

    #[must_use]
    pub fn tooltip_builder(&self) -> TooltipContentBuilder<'_> {
        TooltipContentBuilder::new(self.store.catalog()).with_top_k(self.config.top_k)
    }

    /// Tooltip for the hovered record under the current mode and focus.
    #[must_use]
    pub fn tooltip_content(&self) -> Option<TooltipContent> {
        let record = self.hovered_record()?;
        Some(self.tooltip_builder().build(
            record,
            self.config.display_mode,
            self.focused_series(),
        ))
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
