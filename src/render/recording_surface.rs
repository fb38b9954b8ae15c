use crate::error::{ChartError, ChartResult};
use crate::render::{
    Path, RenderFrame, StrokeStyle, StrokedPath, Surface, SurfaceSize, TextPrimitive, TextStyle,
};

/// Headless surface that records every draw call into a `RenderFrame`.
///
/// It validates each call so tests catch invalid geometry the same way a
/// raster backend would reject it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    frame: RenderFrame,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub fn into_frame(self) -> RenderFrame {
        self.frame
    }

    fn ensure_configured(&self) -> ChartResult<()> {
        if self.frame.size.is_none() {
            return Err(ChartError::InvalidData(
                "surface must be configured before drawing".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Surface for RecordingSurface {
    fn configure(&mut self, size: SurfaceSize) -> ChartResult<()> {
        size.validate()?;
        // Resizing a canvas clears it.
        self.frame = RenderFrame::new(size);
        Ok(())
    }

    fn stroke_path(&mut self, path: &Path, style: StrokeStyle) -> ChartResult<()> {
        self.ensure_configured()?;
        path.validate()?;
        style.validate()?;
        self.frame.strokes.push(StrokedPath {
            path: path.clone(),
            style,
        });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> ChartResult<()> {
        self.ensure_configured()?;
        let primitive = TextPrimitive::new(text, x, y, style.clone());
        primitive.validate()?;
        self.frame.texts.push(primitive);
        Ok(())
    }
}
