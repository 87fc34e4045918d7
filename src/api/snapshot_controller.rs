use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, EngineSnapshot};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let catalog = self.store.catalog();
        let state = self.visibility.state();
        EngineSnapshot {
            viewport: self.config.viewport,
            plot_area: self.scales.plot_area(),
            scale_mode: self.scales.mode(),
            display_mode: self.config.display_mode,
            top_k: self.config.top_k,
            focused_series: state
                .focused_series()
                .map(|series| catalog.key(series).to_owned()),
            visibility: catalog
                .iter()
                .map(|(series, descriptor)| (descriptor.key.clone(), state.flag(series)))
                .collect(),
            hovered_index: self.pointer.hovered(),
            time_domain: self.scales.time_scale().domain_seconds(),
            value_domain: self.scales.value_scale().domain(),
            record_count: self.store.len(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
