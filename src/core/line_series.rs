use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, Scale, Series, ViewportGeometry};

/// Pixel-space geometry of one line series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedSeries {
    pub name: String,
    pub points: Vec<PixelPoint>,
}

/// Projects every value of `series` into device pixels.
///
/// Value `i` lands at `x = floor(i * x_ratio)` and
/// `y = floor(device_height - padding - value * y_ratio)`; the y axis is
/// inverted so larger values sit higher. One point per value, in order, with
/// no clipping or deduplication.
#[must_use]
pub fn to_pixel_coords(series: &Series, scale: Scale, geometry: &ViewportGeometry) -> ProjectedSeries {
    let baseline = geometry.device_height() - geometry.padding;
    let points = series
        .values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            PixelPoint::new(
                (index as f64 * scale.x_ratio()).floor(),
                (baseline - value * scale.y_ratio()).floor(),
            )
        })
        .collect();

    ProjectedSeries {
        name: series.name.clone(),
        points,
    }
}
