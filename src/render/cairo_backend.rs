use std::io::Write;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Path, PathCommand, StrokeStyle, Surface, SurfaceSize, TextStyle};

const CLEAR_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub paths_stroked: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo raster surface.
///
/// The backing `ImageSurface` is (re)created by `Surface::configure` at the
/// device pixel size, then cleared to white.
#[derive(Debug)]
pub struct CairoSurface {
    surface: Option<ImageSurface>,
    stats: CairoRenderStats,
}

impl Default for CairoSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl CairoSurface {
    #[must_use]
    pub fn new() -> Self {
        Self {
            surface: None,
            stats: CairoRenderStats::default(),
        }
    }

    #[must_use]
    pub fn image_surface(&self) -> Option<&ImageSurface> {
        self.surface.as_ref()
    }

    #[must_use]
    pub fn stats(&self) -> CairoRenderStats {
        self.stats
    }

    /// Encodes the current raster as PNG.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> ChartResult<()> {
        let surface = self.configured_surface()?;
        surface
            .write_to_png(writer)
            .map_err(|err| ChartError::Backend(format!("failed to write png: {err}")))
    }

    fn configured_surface(&self) -> ChartResult<&ImageSurface> {
        self.surface.as_ref().ok_or_else(|| {
            ChartError::Backend("cairo surface must be configured before use".to_owned())
        })
    }

    fn context(&self) -> ChartResult<Context> {
        Context::new(self.configured_surface()?)
            .map_err(|err| map_backend_error("failed to create cairo context", err))
    }
}

impl Surface for CairoSurface {
    fn configure(&mut self, size: SurfaceSize) -> ChartResult<()> {
        size.validate()?;
        let width = i32::try_from(size.device.width)
            .map_err(|_| ChartError::Backend("device width overflows i32".to_owned()))?;
        let height = i32::try_from(size.device.height)
            .map_err(|_| ChartError::Backend("device height overflows i32".to_owned()))?;

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        apply_color(&context, CLEAR_COLOR);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        self.surface = Some(surface);
        self.stats = CairoRenderStats::default();
        Ok(())
    }

    fn stroke_path(&mut self, path: &Path, style: StrokeStyle) -> ChartResult<()> {
        path.validate()?;
        style.validate()?;
        let context = self.context()?;

        context.new_path();
        for command in path.commands() {
            match *command {
                PathCommand::MoveTo { x, y } => context.move_to(x, y),
                PathCommand::LineTo { x, y } => context.line_to(x, y),
            }
        }
        apply_color(&context, style.color);
        context.set_line_width(style.width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke path", err))?;

        self.stats.paths_stroked += 1;
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> ChartResult<()> {
        style.validate()?;
        let context = self.context()?;

        let layout = pangocairo::functions::create_layout(&context);
        let mut font_description = FontDescription::new();
        font_description.set_family(&style.font_family);
        font_description.set_absolute_size(style.font_size_px * f64::from(pango::SCALE));
        layout.set_font_description(Some(&font_description));
        layout.set_text(text);

        // Pango positions the layout by its top edge; the caller passes the baseline.
        let baseline_px = f64::from(layout.baseline()) / f64::from(pango::SCALE);
        apply_color(&context, style.color);
        context.move_to(x, y - baseline_px);
        pangocairo::functions::show_layout(&context, &layout);

        self.stats.texts_drawn += 1;
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
