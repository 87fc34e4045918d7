use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::error::{ChartError, ChartResult};

/// Position of a series inside its [`SeriesCatalog`].
///
/// Ids are only meaningful for the catalog that issued them; catalog order is
/// the tie-breaker wherever series are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(pub usize);

impl SeriesId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Static description of one tracked measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub key: String,
    pub label: String,
    pub color: Color,
    /// Column the measure is read from during ingestion.
    pub source_column: String,
}

impl SeriesDescriptor {
    #[must_use]
    pub fn new(key: impl Into<String>, color: Color, source_column: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            label: key.clone(),
            key,
            color,
            source_column: source_column.into(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Ordered, load-time-fixed set of series with one distinguished baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesCatalog {
    series: IndexMap<String, SeriesDescriptor>,
    baseline: SeriesId,
}

impl SeriesCatalog {
    pub fn new(descriptors: Vec<SeriesDescriptor>, baseline_key: &str) -> ChartResult<Self> {
        if descriptors.is_empty() {
            return Err(ChartError::InvalidData(
                "series catalog must not be empty".to_owned(),
            ));
        }

        let mut series = IndexMap::with_capacity(descriptors.len());
        for descriptor in descriptors {
            if descriptor.key.is_empty() {
                return Err(ChartError::InvalidData(
                    "series key must not be empty".to_owned(),
                ));
            }
            descriptor.color.validate()?;
            let key = descriptor.key.clone();
            if series.insert(key.clone(), descriptor).is_some() {
                return Err(ChartError::InvalidData(format!(
                    "duplicate series key `{key}`"
                )));
            }
        }

        let baseline = series
            .get_index_of(baseline_key)
            .map(SeriesId)
            .ok_or_else(|| ChartError::UnknownSeries(baseline_key.to_owned()))?;

        Ok(Self { series, baseline })
    }

    /// Catalog of the monthly mortality-cause dataset, baseline `all_deaths`.
    pub fn mortality() -> ChartResult<Self> {
        let descriptors = MORTALITY_SERIES
            .iter()
            .map(|&(key, column, (r, g, b))| {
                let descriptor = SeriesDescriptor::new(key, Color::rgb8(r, g, b), column);
                if key == MORTALITY_BASELINE_KEY {
                    descriptor.with_label(MORTALITY_BASELINE_LABEL)
                } else {
                    descriptor
                }
            })
            .collect();
        Self::new(descriptors, MORTALITY_BASELINE_KEY)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    #[must_use]
    pub fn baseline(&self) -> SeriesId {
        self.baseline
    }

    #[must_use]
    pub fn is_baseline(&self, id: SeriesId) -> bool {
        id == self.baseline
    }

    #[must_use]
    pub fn get(&self, id: SeriesId) -> Option<&SeriesDescriptor> {
        self.series.get_index(id.0).map(|(_, descriptor)| descriptor)
    }

    /// Resolves a series key to its id.
    pub fn resolve(&self, key: &str) -> ChartResult<SeriesId> {
        self.series
            .get_index_of(key)
            .map(SeriesId)
            .ok_or_else(|| ChartError::UnknownSeries(key.to_owned()))
    }

    /// Key of `id`, or an empty string for a foreign id.
    #[must_use]
    pub fn key(&self, id: SeriesId) -> &str {
        self.get(id).map_or("", |descriptor| descriptor.key.as_str())
    }

    pub fn ids(&self) -> impl ExactSizeIterator<Item = SeriesId> + '_ {
        (0..self.series.len()).map(SeriesId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SeriesId, &SeriesDescriptor)> + '_ {
        self.series
            .values()
            .enumerate()
            .map(|(index, descriptor)| (SeriesId(index), descriptor))
    }
}

pub const MORTALITY_BASELINE_KEY: &str = "all_deaths";
pub const MORTALITY_BASELINE_LABEL: &str = "Total Deaths";

const MORTALITY_SERIES: [(&str, &str, (u8, u8, u8)); 14] = [
    ("all_deaths", "All Cause", (255, 0, 0)),
    ("natural_deaths", "Natural Cause", (0, 128, 0)),
    (
        "covid_19_multiple",
        "COVID-19 (Multiple Cause of Death)",
        (0, 0, 255),
    ),
    (
        "covid_19_underlying",
        "COVID-19 (Underlying Cause of Death)",
        (255, 165, 0),
    ),
    ("drug_overdose", "Drug Overdose", (128, 0, 128)),
    ("homicide", "Assault (Homicide)", (128, 128, 128)),
    ("suicide", "Intentional Self-Harm (Suicide)", (0, 0, 0)),
    ("vehicle_accidents", "Motor Vehicle Accidents", (128, 128, 0)),
    (
        "unintentional_injuries",
        "Accidents (Unintentional Injuries)",
        (205, 133, 63),
    ),
    ("heart_diseases", "Diseases of Heart", (165, 42, 42)),
    (
        "cerebrovascular_diseases",
        "Cerebrovascular Diseases",
        (0, 139, 139),
    ),
    ("alzheimers", "Alzheimer Disease", (139, 0, 139)),
    ("diabetes", "Diabetes Mellitus", (240, 230, 140)),
    ("influenza_pneumonia", "Influenza and Pneumonia", (160, 82, 45)),
];
