use serde::Serialize;
use tracing::debug;

use crate::core::{
    Boundary, Dataset, GridLines, ProjectedSeries, Scale, build_scale, compute_boundaries,
    grid_lines,
};
use crate::error::{ChartError, ChartResult};
use crate::render::Surface;

use super::{ChartConfig, project_series, render_axis, render_series};

/// Geometry of one render pass, computed without touching a surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub boundary: Boundary,
    pub scale: Scale,
    pub grid_lines: GridLines,
    pub series: Vec<ProjectedSeries>,
}

/// Boundary and scale shared by the axis and series passes.
fn measure(dataset: &Dataset, config: &ChartConfig) -> ChartResult<(Boundary, Scale)> {
    config.validate()?;
    let boundary = compute_boundaries(dataset)?;
    let scale = build_scale(boundary, dataset.x_series().len(), &config.geometry)?;
    Ok((boundary, scale))
}

/// Computes the full chart geometry for `dataset`.
pub fn layout_chart(dataset: &Dataset, config: &ChartConfig) -> ChartResult<ChartLayout> {
    let (boundary, scale) = measure(dataset, config)?;
    Ok(ChartLayout {
        boundary,
        scale,
        grid_lines: grid_lines(boundary, &config.geometry)?,
        series: project_series(dataset, scale, config),
    })
}

/// Renders `dataset` onto `surface`.
///
/// Sizes the surface, computes the boundary and scale once, then draws the
/// axis followed by every line series. Fails before drawing anything when the
/// surface is absent or the data has no usable range.
pub fn render_chart<S: Surface + ?Sized>(
    surface: Option<&mut S>,
    dataset: &Dataset,
    config: &ChartConfig,
) -> ChartResult<ChartLayout> {
    let surface = surface.ok_or(ChartError::MissingSurface)?;
    let (boundary, scale) = measure(dataset, config)?;

    debug!(
        line_series = dataset.line_series().count(),
        points = dataset.x_series().len(),
        min = boundary.min,
        max = boundary.max,
        x_ratio = scale.x_ratio(),
        y_ratio = scale.y_ratio(),
        time_span = ?dataset.x_time_span(),
        "render chart"
    );

    surface.configure(config.geometry.surface_size()?)?;
    let grid_lines = render_axis(&mut *surface, boundary, config)?;
    let series = render_series(&mut *surface, dataset, scale, config)?;

    Ok(ChartLayout {
        boundary,
        scale,
        grid_lines,
        series,
    })
}

/// Chart facade owning its drawing surface.
pub struct LineChart<S: Surface> {
    surface: S,
    config: ChartConfig,
}

impl<S: Surface> LineChart<S> {
    pub fn new(surface: S, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self { surface, config })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn render(&mut self, dataset: &Dataset) -> ChartResult<ChartLayout> {
        render_chart(Some(&mut self.surface), dataset, &self.config)
    }

    pub fn layout(&self, dataset: &Dataset) -> ChartResult<ChartLayout> {
        layout_chart(dataset, &self.config)
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}
