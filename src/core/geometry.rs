use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::SurfaceSize;

pub const DEFAULT_WIDTH: f64 = 600.0;
pub const DEFAULT_HEIGHT: f64 = 200.0;
pub const DEFAULT_PIXEL_RATIO: f64 = 2.0;
pub const DEFAULT_PADDING: f64 = 40.0;
pub const DEFAULT_ROWS_COUNT: usize = 5;

/// Physical/logical chart dimensions.
///
/// `width`/`height` are the declared logical size. All drawing happens in
/// device pixels (`logical * pixel_ratio`); `padding` is reserved above and
/// below the plotting area in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportGeometry {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
    pub padding: f64,
    pub rows_count: usize,
}

impl Default for ViewportGeometry {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            pixel_ratio: DEFAULT_PIXEL_RATIO,
            padding: DEFAULT_PADDING,
            rows_count: DEFAULT_ROWS_COUNT,
        }
    }
}

impl ViewportGeometry {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_rows_count(mut self, rows_count: usize) -> Self {
        self.rows_count = rows_count;
        self
    }

    #[must_use]
    pub fn device_width(&self) -> f64 {
        self.width * self.pixel_ratio
    }

    #[must_use]
    pub fn device_height(&self) -> f64 {
        self.height * self.pixel_ratio
    }

    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.device_width()
    }

    #[must_use]
    pub fn plot_height(&self) -> f64 {
        self.device_height() - self.padding * 2.0
    }

    pub fn validate(&self) -> ChartResult<()> {
        let positive = |value: f64| value.is_finite() && value > 0.0;
        if !positive(self.width) || !positive(self.height) || !positive(self.pixel_ratio) {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ChartError::InvalidData(
                "padding must be finite and >= 0".to_owned(),
            ));
        }
        if !positive(self.plot_height()) {
            return Err(ChartError::InvalidData(format!(
                "padding {} leaves no plotting height in {} device pixels",
                self.padding,
                self.device_height()
            )));
        }
        if self.rows_count == 0 {
            return Err(ChartError::InvalidData(
                "rows count must be > 0".to_owned(),
            ));
        }
        // every grid row needs at least one device pixel of plot height
        if self.rows_count as f64 > self.plot_height() {
            return Err(ChartError::InvalidData(format!(
                "rows count {} exceeds the {} device pixels of plot height",
                self.rows_count,
                self.plot_height()
            )));
        }
        Ok(())
    }

    /// Size to apply to the surface; the device size is rounded to whole pixels.
    pub fn surface_size(&self) -> ChartResult<SurfaceSize> {
        self.validate()?;
        let to_pixels = |value: f64| -> ChartResult<u32> {
            let rounded = value.round();
            if rounded < 1.0 || rounded > f64::from(u32::MAX) {
                return Err(ChartError::InvalidViewport {
                    width: self.device_width(),
                    height: self.device_height(),
                });
            }
            Ok(rounded as u32)
        };

        Ok(SurfaceSize {
            logical_width: self.width,
            logical_height: self.height,
            device: Viewport::new(
                to_pixels(self.device_width())?,
                to_pixels(self.device_height())?,
            ),
        })
    }
}
