use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::error::{ChartError, ChartResult};

/// Lower domain bound of the logarithmic axis, independent of the data minimum.
pub const LOG_DOMAIN_FLOOR: f64 = 1.0;

/// Mapping mode of the vertical value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ScaleMode {
    /// Uniform spacing in raw units, domain starting at `0`.
    #[default]
    #[serde(rename = "linear")]
    Linear,
    /// Uniform spacing in base-2 log units, domain starting at [`LOG_DOMAIN_FLOOR`].
    #[serde(rename = "log-base-2")]
    Log2,
}

impl ScaleMode {
    #[must_use]
    pub fn domain_floor(self) -> f64 {
        match self {
            Self::Linear => 0.0,
            Self::Log2 => LOG_DOMAIN_FLOOR,
        }
    }
}

/// Vertical `value -> pixel` mapping; larger values sit higher (smaller y).
///
/// In log mode values below the floor are clipped onto the floor rather than
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    mode: ScaleMode,
    domain_min: f64,
    domain_max: f64,
    linear: LinearScale,
}

impl ValueScale {
    /// Builds a scale whose domain is `[mode floor, max_value]` over `[height_px, 0]`.
    pub fn new(mode: ScaleMode, max_value: f64, height_px: f64) -> ChartResult<Self> {
        if !max_value.is_finite() {
            return Err(ChartError::InvalidData(
                "value domain upper bound must be finite".to_owned(),
            ));
        }

        let domain_min = mode.domain_floor();
        let domain_max = max_value.max(domain_min);
        let linear = LinearScale::new(
            (
                to_transformed(domain_min, mode),
                to_transformed(domain_max, mode),
            ),
            (height_px, 0.0),
        )?;

        Ok(Self {
            mode,
            domain_min,
            domain_max,
            linear,
        })
    }

    /// Same mode and domain, new pixel height.
    pub fn with_height(self, height_px: f64) -> ChartResult<Self> {
        Ok(Self {
            linear: self.linear.with_range((height_px, 0.0))?,
            ..self
        })
    }

    #[must_use]
    pub fn mode(self) -> ScaleMode {
        self.mode
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        self.linear.map(to_transformed(value, self.mode))
    }

    #[must_use]
    pub fn pixel_to_value(self, pixel: f64) -> f64 {
        let transformed = self.linear.invert(pixel);
        match self.mode {
            ScaleMode::Linear => transformed,
            ScaleMode::Log2 => transformed.exp2(),
        }
    }
}

fn to_transformed(value: f64, mode: ScaleMode) -> f64 {
    match mode {
        ScaleMode::Linear => value,
        ScaleMode::Log2 => value.max(LOG_DOMAIN_FLOOR).log2(),
    }
}
