use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, Record, SeriesCatalog, SeriesId};
use crate::render::{TooltipContent, TooltipEntry};

use super::label_format::{format_count, format_month_year};

pub const DEFAULT_TOP_K: usize = 4;

/// How much detail the tooltip body shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    /// Every non-baseline series, ranked.
    #[default]
    All,
    /// The `k` highest-ranked non-baseline series.
    TopK,
    /// Only the focused series, or nothing when unfocused.
    FocusedOnly,
}

/// Turns one record into ranked tooltip lines.
///
/// The baseline series always forms the header. The body ranks the other
/// series by descending value with catalog order breaking ties; visibility
/// never affects the ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipContentBuilder<'a> {
    catalog: &'a SeriesCatalog,
    top_k: usize,
}

impl<'a> TooltipContentBuilder<'a> {
    #[must_use]
    pub fn new(catalog: &'a SeriesCatalog) -> Self {
        Self {
            catalog,
            top_k: DEFAULT_TOP_K,
        }
    }

    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    #[must_use]
    pub fn top_k(self) -> usize {
        self.top_k
    }

    #[must_use]
    pub fn build(
        self,
        record: &Record,
        display_mode: DisplayMode,
        focused: Option<SeriesId>,
    ) -> TooltipContent {
        let header = self.entry(record, self.catalog.baseline());
        let body = match display_mode {
            DisplayMode::FocusedOnly => focused
                .filter(|series| self.catalog.get(*series).is_some())
                .map(|series| vec![self.entry(record, series)])
                .unwrap_or_default(),
            DisplayMode::TopK => self
                .ranked(record)
                .into_iter()
                .take(self.top_k)
                .map(|series| self.entry(record, series))
                .collect(),
            DisplayMode::All => self
                .ranked(record)
                .into_iter()
                .map(|series| self.entry(record, series))
                .collect(),
        };

        TooltipContent {
            title: format_month_year(record.timestamp),
            header,
            body,
        }
    }

    /// Non-baseline series ordered by descending value, ties in catalog order.
    #[must_use]
    pub fn ranked(self, record: &Record) -> SmallVec<[SeriesId; 16]> {
        let mut ranked: SmallVec<[SeriesId; 16]> = self
            .catalog
            .ids()
            .filter(|series| !self.catalog.is_baseline(*series))
            .collect();
        // Stable sort keeps catalog order among equal values.
        ranked.sort_by_key(|series| std::cmp::Reverse(OrderedFloat(record.value(*series))));
        ranked
    }

    fn entry(self, record: &Record, series: SeriesId) -> TooltipEntry {
        let value = record.value(series);
        let (label, color) = match self.catalog.get(series) {
            Some(descriptor) => (descriptor.label.clone(), descriptor.color),
            None => (String::new(), Color::rgb(0.0, 0.0, 0.0)),
        };
        TooltipEntry {
            series,
            label,
            value,
            formatted_value: format_count(value),
            color,
        }
    }
}
