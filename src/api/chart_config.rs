use serde::{Deserialize, Serialize};

use crate::core::ViewportGeometry;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, StrokeStyle, TextStyle};

pub const DEFAULT_SERIES_STROKE_WIDTH: f64 = 4.0;
pub const DEFAULT_GRID_STROKE_WIDTH: f64 = 1.0;
pub const DEFAULT_LABEL_FONT_FAMILY: &str = "Helvetica, sans-serif";
pub const DEFAULT_LABEL_FONT_SIZE_PX: f64 = 20.0;
pub const DEFAULT_LABEL_OFFSET_X: f64 = 5.0;
pub const DEFAULT_LABEL_OFFSET_Y: f64 = 10.0;

/// Visual parameters shared by the axis and series renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub series_stroke_width: f64,
    pub grid_stroke: StrokeStyle,
    pub label_text: TextStyle,
    /// Label distance from the left edge.
    pub label_offset_x: f64,
    /// Label baseline distance above its grid line.
    pub label_offset_y: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            series_stroke_width: DEFAULT_SERIES_STROKE_WIDTH,
            grid_stroke: StrokeStyle::new(DEFAULT_GRID_STROKE_WIDTH, Color::rgb8(0xbb, 0xbb, 0xbb)),
            label_text: TextStyle::new(
                DEFAULT_LABEL_FONT_FAMILY,
                DEFAULT_LABEL_FONT_SIZE_PX,
                Color::rgb8(0x96, 0xa2, 0xaa),
            ),
            label_offset_x: DEFAULT_LABEL_OFFSET_X,
            label_offset_y: DEFAULT_LABEL_OFFSET_Y,
        }
    }
}

impl ChartStyle {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.series_stroke_width.is_finite() || self.series_stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "series stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.grid_stroke.validate()?;
        self.label_text.validate()?;
        if !self.label_offset_x.is_finite() || !self.label_offset_y.is_finite() {
            return Err(ChartError::InvalidData(
                "label offsets must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Complete chart setup: geometry plus style.
///
/// Serializable so hosts can keep chart setup in a JSON file; every field
/// falls back to its default when omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub geometry: ViewportGeometry,
    pub style: ChartStyle,
}

impl ChartConfig {
    #[must_use]
    pub fn new(geometry: ViewportGeometry) -> Self {
        Self {
            geometry,
            style: ChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_series_stroke_width(mut self, width: f64) -> Self {
        self.style.series_stroke_width = width;
        self
    }

    #[must_use]
    pub fn with_grid_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.style.grid_stroke = stroke;
        self
    }

    #[must_use]
    pub fn with_label_text(mut self, text: TextStyle) -> Self {
        self.style.label_text = text;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.geometry.validate()?;
        self.style.validate()
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}
