use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{SeriesCatalog, SeriesId};
use crate::error::{ChartError, ChartResult};

/// One time sample carrying a value for every catalog series.
///
/// `values[i]` belongs to `SeriesId(i)` of the catalog the record was built for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub timestamp: DateTime<Utc>,
    pub values: Vec<f64>,
}

impl Record {
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, values: Vec<f64>) -> Self {
        Self { timestamp, values }
    }

    /// Value of `series`, `0.0` for ids outside the record.
    #[must_use]
    pub fn value(&self, series: SeriesId) -> f64 {
        self.values.get(series.index()).copied().unwrap_or(0.0)
    }

    /// Largest value across all series of this record.
    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }
}

/// Immutable, strictly time-ordered record collection paired with its catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesStore {
    catalog: SeriesCatalog,
    records: Vec<Record>,
}

impl TimeSeriesStore {
    /// Validates and freezes an already canonical record sequence.
    ///
    /// Rejects empty input, records whose value count differs from the
    /// catalog, non-finite values, and timestamps that are not strictly
    /// ascending. Use [`crate::core::canonicalize_records`] first when the
    /// input may be unsorted or dirty.
    pub fn new(catalog: SeriesCatalog, records: Vec<Record>) -> ChartResult<Self> {
        if records.is_empty() {
            return Err(ChartError::EmptyDataSet);
        }

        let expected = catalog.len();
        for (index, record) in records.iter().enumerate() {
            if record.values.len() != expected {
                return Err(ChartError::InvalidData(format!(
                    "record {index} has {} values, catalog has {expected} series",
                    record.values.len()
                )));
            }
            if record.values.iter().any(|value| !value.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "record {index} contains a non-finite value"
                )));
            }
        }

        if let Some(index) = records
            .windows(2)
            .position(|pair| pair[0].timestamp >= pair[1].timestamp)
        {
            return Err(ChartError::InvalidData(format!(
                "record timestamps must be strictly ascending (violated at index {})",
                index + 1
            )));
        }

        Ok(Self { catalog, records })
    }

    #[must_use]
    pub fn catalog(&self) -> &SeriesCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; construction rejects empty record sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First and last timestamps.
    #[must_use]
    pub fn time_extent(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let first = self.records[0].timestamp;
        let last = self.records[self.records.len() - 1].timestamp;
        (first, last)
    }

    /// Maximum value across every series and every record, regardless of visibility.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.records
            .iter()
            .filter_map(Record::max_value)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Values of one series in time order.
    pub fn series_values(&self, series: SeriesId) -> impl Iterator<Item = (DateTime<Utc>, f64)> + '_ {
        self.records
            .iter()
            .map(move |record| (record.timestamp, record.value(series)))
    }
}
