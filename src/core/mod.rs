pub mod ingest;
pub mod nearest;
pub mod primitives;
pub mod record;
pub mod scale;
pub mod series;
pub mod time_scale;
pub mod types;
pub mod value_scale;

pub use ingest::{
    ColumnMapping, IngestReport, Ingested, RawRow, canonicalize_records, coerce_measure,
    ingest_rows, parse_date,
};
pub use nearest::NearestPointResolver;
pub use record::{Record, TimeSeriesStore};
pub use scale::LinearScale;
pub use series::{
    MORTALITY_BASELINE_KEY, MORTALITY_BASELINE_LABEL, SeriesCatalog, SeriesDescriptor, SeriesId,
};
pub use time_scale::TimeScale;
pub use types::{Color, PlotArea, Viewport};
pub use value_scale::{LOG_DOMAIN_FLOOR, ScaleMode, ValueScale};
