use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::core::primitives::{datetime_to_unix_seconds, unix_seconds_to_datetime};
use crate::error::ChartResult;

/// Horizontal `date -> pixel` mapping over the record time extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    /// Maps `[start, end]` onto `[0, width_px]`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, width_px: f64) -> ChartResult<Self> {
        let linear = LinearScale::new(
            (datetime_to_unix_seconds(start), datetime_to_unix_seconds(end)),
            (0.0, width_px),
        )?;
        Ok(Self { linear })
    }

    /// Keeps the time domain and replaces the pixel range.
    pub fn with_width(self, width_px: f64) -> ChartResult<Self> {
        Ok(Self {
            linear: self.linear.with_range((0.0, width_px))?,
        })
    }

    #[must_use]
    pub fn domain(self) -> (DateTime<Utc>, DateTime<Utc>) {
        let (start, end) = self.linear.domain();
        (unix_seconds_to_datetime(start), unix_seconds_to_datetime(end))
    }

    /// Domain in unix seconds.
    #[must_use]
    pub fn domain_seconds(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn time_to_pixel(self, time: DateTime<Utc>) -> f64 {
        self.linear.map(datetime_to_unix_seconds(time))
    }

    #[must_use]
    pub fn pixel_to_time(self, pixel: f64) -> DateTime<Utc> {
        unix_seconds_to_datetime(self.linear.invert(pixel))
    }
}
