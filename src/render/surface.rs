use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{Path, StrokeStyle, TextStyle};

/// Size applied to a surface before drawing.
///
/// `logical_*` is the declared display size, `device` is the backing raster
/// size in physical pixels (logical size times the pixel ratio).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub logical_width: f64,
    pub logical_height: f64,
    pub device: Viewport,
}

impl SurfaceSize {
    pub fn validate(self) -> ChartResult<()> {
        let logical_ok = self.logical_width.is_finite()
            && self.logical_height.is_finite()
            && self.logical_width > 0.0
            && self.logical_height > 0.0;
        if !logical_ok || !self.device.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: f64::from(self.device.width),
                height: f64::from(self.device.height),
            });
        }
        Ok(())
    }
}

/// 2D raster drawing target the chart writes into.
///
/// Every draw call carries its own style so implementations never depend on
/// ambient state left behind by an earlier call.
pub trait Surface {
    fn configure(&mut self, size: SurfaceSize) -> ChartResult<()>;

    fn stroke_path(&mut self, path: &Path, style: StrokeStyle) -> ChartResult<()>;

    /// Fills `text` with its alphabetic baseline starting at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> ChartResult<()>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn configure(&mut self, size: SurfaceSize) -> ChartResult<()> {
        (**self).configure(size)
    }

    fn stroke_path(&mut self, path: &Path, style: StrokeStyle) -> ChartResult<()> {
        (**self).stroke_path(path, style)
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> ChartResult<()> {
        (**self).fill_text(text, x, y, style)
    }
}
