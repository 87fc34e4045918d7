use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Record, SeriesCatalog, TimeSeriesStore};
use crate::error::{ChartError, ChartResult};

/// One parsed source row: column header -> raw cell text.
pub type RawRow = IndexMap<String, String>;

pub const DEFAULT_DATE_COLUMN: &str = "End Date";
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Where each record field is read from in a [`RawRow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub date_column: String,
    /// `chrono` format string for the date cell.
    pub date_format: String,
    /// Source column per series, aligned with catalog order.
    pub series_columns: Vec<String>,
}

impl ColumnMapping {
    /// Uses each descriptor's `source_column` and the default date column/format.
    #[must_use]
    pub fn for_catalog(catalog: &SeriesCatalog) -> Self {
        Self {
            date_column: DEFAULT_DATE_COLUMN.to_owned(),
            date_format: DEFAULT_DATE_FORMAT.to_owned(),
            series_columns: catalog
                .iter()
                .map(|(_, descriptor)| descriptor.source_column.clone())
                .collect(),
        }
    }
}

/// Counters describing what ingestion had to repair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReport {
    pub rows_read: usize,
    pub rows_dropped: usize,
    pub measures_coerced: usize,
    pub duplicate_timestamps: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ingested {
    pub store: TimeSeriesStore,
    pub report: IngestReport,
}

/// Coerces one measure cell to a finite number.
///
/// Blank cells read as `0`. Unparsable or non-finite text also becomes `0`
/// and is reported through the second tuple field so callers can count it.
#[must_use]
pub fn coerce_measure(cell: Option<&str>) -> (f64, bool) {
    let Some(text) = cell.map(str::trim) else {
        return (0.0, true);
    };
    if text.is_empty() {
        return (0.0, false);
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => (value, false),
        _ => (0.0, true),
    }
}

/// Parses a date cell into midnight UTC of that day.
pub fn parse_date(cell: &str, format: &str) -> ChartResult<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(cell.trim(), format).map_err(|err| {
        ChartError::InvalidData(format!("unparsable date `{cell}` ({format}): {err}"))
    })?;
    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc())
}

/// Builds a store from raw rows, repairing what can be repaired.
///
/// Rows with an unparsable date are dropped; measures are coerced with
/// [`coerce_measure`]; records are then canonicalized. Fails with
/// [`ChartError::EmptyDataSet`] when nothing usable remains.
pub fn ingest_rows<I>(
    catalog: SeriesCatalog,
    mapping: &ColumnMapping,
    rows: I,
) -> ChartResult<Ingested>
where
    I: IntoIterator<Item = RawRow>,
{
    if mapping.series_columns.len() != catalog.len() {
        return Err(ChartError::InvalidData(format!(
            "column mapping names {} series columns, catalog has {} series",
            mapping.series_columns.len(),
            catalog.len()
        )));
    }

    let mut report = IngestReport::default();
    let mut records = Vec::new();
    for row in rows {
        report.rows_read += 1;
        let Some(date_cell) = row.get(&mapping.date_column) else {
            report.rows_dropped += 1;
            continue;
        };
        let timestamp = match parse_date(date_cell, &mapping.date_format) {
            Ok(timestamp) => timestamp,
            Err(err) => {
                warn!(row = report.rows_read, error = %err, "dropping row");
                report.rows_dropped += 1;
                continue;
            }
        };

        let values = mapping
            .series_columns
            .iter()
            .map(|column| {
                let (value, coerced) = coerce_measure(row.get(column).map(String::as_str));
                if coerced {
                    report.measures_coerced += 1;
                }
                value
            })
            .collect();
        records.push(Record::new(timestamp, values));
    }

    let parsed_count = records.len();
    let records = canonicalize_records(records);
    report.duplicate_timestamps = parsed_count - records.len();

    if report.rows_dropped > 0 || report.measures_coerced > 0 {
        warn!(
            rows_dropped = report.rows_dropped,
            measures_coerced = report.measures_coerced,
            "ingestion repaired malformed input"
        );
    }
    debug!(
        rows_read = report.rows_read,
        records = records.len(),
        "ingested rows"
    );

    let store = TimeSeriesStore::new(catalog, records)?;
    Ok(Ingested { store, report })
}

/// Sorts by timestamp, keeps the last record of each duplicate timestamp and
/// replaces non-finite values with `0`.
#[must_use]
pub fn canonicalize_records(mut records: Vec<Record>) -> Vec<Record> {
    let mut coerced_count = 0_usize;
    for record in &mut records {
        for value in &mut record.values {
            if !value.is_finite() {
                *value = 0.0;
                coerced_count += 1;
            }
        }
    }
    records.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    let mut deduped: Vec<Record> = Vec::with_capacity(records.len());
    let mut duplicate_count = 0_usize;
    for record in records {
        if let Some(last) = deduped.last_mut() {
            if record.timestamp.cmp(&last.timestamp) == Ordering::Equal {
                *last = record;
                duplicate_count += 1;
                continue;
            }
        }
        deduped.push(record);
    }

    if coerced_count > 0 || duplicate_count > 0 {
        warn!(
            coerced_count,
            duplicate_count,
            canonical_count = deduped.len(),
            "canonicalized records"
        );
    }
    deduped
}
