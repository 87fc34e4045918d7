use chrono::{DateTime, Utc};

use crate::core::{Record, TimeSeriesStore};

/// Maps a queried time to a record index by bisection over ascending timestamps.
///
/// The lookup returns the left-most insertion point of the query, clamped to
/// the valid index range: queries before the first record resolve to `0`,
/// queries at or after the last record resolve to the last index, and an
/// exact timestamp match resolves to that record.
#[derive(Debug, Clone, Copy)]
pub struct NearestPointResolver<'a> {
    records: &'a [Record],
}

impl<'a> NearestPointResolver<'a> {
    #[must_use]
    pub fn new(store: &'a TimeSeriesStore) -> Self {
        Self {
            records: store.records(),
        }
    }

    /// Builds a resolver over a raw slice; the slice must be time-ascending.
    #[must_use]
    pub fn from_records(records: &'a [Record]) -> Self {
        Self { records }
    }

    /// Returns `None` only for an empty record slice.
    #[must_use]
    pub fn resolve(self, query: DateTime<Utc>) -> Option<usize> {
        let last = self.records.len().checked_sub(1)?;
        let insertion = self
            .records
            .partition_point(|record| record.timestamp < query);
        Some(insertion.min(last))
    }
}
