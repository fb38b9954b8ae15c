use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::Dataset;
use crate::error::{ChartError, ChartResult};

/// Global value range across all line series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub min: f64,
    pub max: f64,
}

impl Boundary {
    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_flat(self) -> bool {
        self.max == self.min
    }
}

/// Scans every line series (the x series is skipped) for the global min/max.
///
/// The running extremes are seeded from the first scanned value, so the
/// result is always made of actual data values.
pub fn compute_boundaries(dataset: &Dataset) -> ChartResult<Boundary> {
    let mut extremes: Option<(OrderedFloat<f64>, OrderedFloat<f64>)> = None;

    for value in dataset
        .line_series()
        .flat_map(|series| series.values.iter().copied().map(OrderedFloat))
    {
        extremes = Some(match extremes {
            None => (value, value),
            Some((min, max)) => (min.min(value), max.max(value)),
        });
    }

    let (min, max) = extremes.ok_or(ChartError::DegenerateBoundary)?;
    Ok(Boundary {
        min: min.into_inner(),
        max: max.into_inner(),
    })
}
