use serde::Serialize;

use crate::core::{Boundary, ViewportGeometry};
use crate::error::{ChartError, ChartResult};

/// Pixels per domain unit along each axis.
///
/// Only built through `build_scale`, which guarantees both ratios are finite
/// and positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scale {
    x_ratio: f64,
    y_ratio: f64,
}

impl Scale {
    #[must_use]
    pub fn x_ratio(self) -> f64 {
        self.x_ratio
    }

    #[must_use]
    pub fn y_ratio(self) -> f64 {
        self.y_ratio
    }
}

/// Derives `x_ratio = plot_width / (series_len + 1)` and
/// `y_ratio = plot_height / (max - min)`.
///
/// `series_len` counts data values only. The horizontal step reserves one
/// extra slot, the width a series occupies when its name heads the column,
/// so the last point lands one step short of the right edge.
///
/// A flat range is rejected instead of producing an infinite ratio.
pub fn build_scale(
    boundary: Boundary,
    series_len: usize,
    geometry: &ViewportGeometry,
) -> ChartResult<Scale> {
    geometry.validate()?;

    if !boundary.min.is_finite() || !boundary.max.is_finite() || boundary.min > boundary.max {
        return Err(ChartError::InvalidData(format!(
            "boundary [{}, {}] must be finite and ordered",
            boundary.min, boundary.max
        )));
    }
    if boundary.is_flat() {
        return Err(ChartError::FlatRange {
            value: boundary.min,
        });
    }
    if series_len == 0 {
        return Err(ChartError::InvalidData(
            "series length must be > 0 to derive a horizontal scale".to_owned(),
        ));
    }

    let x_ratio = geometry.plot_width() / (series_len + 1) as f64;
    let y_ratio = geometry.plot_height() / boundary.span();
    if !x_ratio.is_finite() || !y_ratio.is_finite() || x_ratio <= 0.0 || y_ratio <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "scale ratios must be finite and > 0 (x={x_ratio}, y={y_ratio})"
        )));
    }

    Ok(Scale { x_ratio, y_ratio })
}
