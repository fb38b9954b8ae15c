use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Boundary, ViewportGeometry};
use crate::error::ChartResult;

/// One horizontal grid line and the value printed next to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub y: f64,
    pub label_value: f64,
}

impl GridLine {
    /// Label text as a canvas would print the number.
    ///
    /// Magnitudes from `1e21` up switch to exponent form (`1e+21`).
    #[must_use]
    pub fn label(self) -> String {
        let value = self.label_value;
        if value.abs() < 1e21 {
            return format!("{value:.0}");
        }
        let exponent = format!("{value:e}");
        match exponent.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exponent,
        }
    }
}

pub type GridLines = SmallVec<[GridLine; 8]>;

/// Evenly spaced grid lines, top to bottom.
///
/// Line `i` (1-based) sits at `plot_height / rows * i + padding` and is
/// labeled `round(max - span / rows * i)`, so labels descend in equal steps.
/// Fails when the geometry does not validate.
pub fn grid_lines(boundary: Boundary, geometry: &ViewportGeometry) -> ChartResult<GridLines> {
    geometry.validate()?;
    let rows = geometry.rows_count as f64;
    let step = geometry.plot_height() / rows;
    let text_step = boundary.span() / rows;

    Ok((1..=geometry.rows_count)
        .map(|row| {
            let row = row as f64;
            GridLine {
                y: step * row + geometry.padding,
                label_value: round_half_up(boundary.max - text_step * row),
            }
        })
        .collect())
}

/// Rounds halves toward positive infinity and never yields `-0.0`.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor() + 0.0
}
