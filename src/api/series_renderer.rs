use tracing::trace;

use crate::core::{Dataset, ProjectedSeries, Scale, to_pixel_coords};
use crate::error::{ChartError, ChartResult};
use crate::render::{Path, StrokeStyle, Surface};

use super::ChartConfig;

/// Projects every line series (x series skipped, column order kept).
#[must_use]
pub fn project_series(dataset: &Dataset, scale: Scale, config: &ChartConfig) -> Vec<ProjectedSeries> {
    dataset
        .line_series()
        .map(|series| to_pixel_coords(series, scale, &config.geometry))
        .collect()
}

/// Strokes each line series as one polyline in its color.
///
/// Series are drawn in column order, so later series cover earlier ones.
pub fn render_series<S: Surface + ?Sized>(
    surface: &mut S,
    dataset: &Dataset,
    scale: Scale,
    config: &ChartConfig,
) -> ChartResult<Vec<ProjectedSeries>> {
    let projected = project_series(dataset, scale, config);

    for series in &projected {
        let color = dataset
            .color(&series.name)
            .ok_or_else(|| ChartError::MissingColor {
                series: series.name.clone(),
            })?;
        trace!(
            series = %series.name,
            label = dataset.display_name(&series.name),
            points = series.points.len(),
            "stroke line series"
        );

        let path = Path::polyline(series.points.iter().map(|point| (point.x, point.y)));
        surface.stroke_path(&path, StrokeStyle::new(config.style.series_stroke_width, color))?;
    }

    Ok(projected)
}
