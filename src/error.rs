use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("dataset has no line series values to compute boundaries from")]
    DegenerateBoundary,

    #[error("flat value range: every line value equals {value}")]
    FlatRange { value: f64 },

    #[error("line series `{series}` has no color")]
    MissingColor { series: String },

    #[error("no drawing surface supplied")]
    MissingSurface,

    #[error("surface backend error: {0}")]
    Backend(String),
}
