use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("record set is empty; chart setup aborted")]
    EmptyDataSet,

    #[error("unknown series: {0}")]
    UnknownSeries(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
