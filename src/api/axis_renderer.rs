use crate::core::{Boundary, GridLines, grid_lines};
use crate::error::ChartResult;
use crate::render::{Path, Surface};

use super::ChartConfig;

/// Draws the horizontal grid and its value labels.
///
/// All grid lines go into one path stroked once with the grid style; each
/// label is filled left-aligned just above its line. Returns the grid lines
/// that were drawn.
pub fn render_axis<S: Surface + ?Sized>(
    surface: &mut S,
    boundary: Boundary,
    config: &ChartConfig,
) -> ChartResult<GridLines> {
    let geometry = &config.geometry;
    let style = &config.style;
    let lines = grid_lines(boundary, geometry)?;

    let mut path = Path::new();
    for line in &lines {
        surface.fill_text(
            &line.label(),
            style.label_offset_x,
            line.y - style.label_offset_y,
            &style.label_text,
        )?;
        path.move_to(0.0, line.y);
        path.line_to(geometry.device_width(), line.y);
    }
    surface.stroke_path(&path, style.grid_stroke)?;

    Ok(lines)
}
