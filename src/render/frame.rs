use crate::error::{ChartError, ChartResult};
use crate::render::{Path, PathCommand, StrokeStyle, SurfaceSize, TextPrimitive};

/// One stroked path together with the style it was stroked with.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokedPath {
    pub path: Path,
    pub style: StrokeStyle,
}

/// Backend-agnostic record of one chart draw pass, in call order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderFrame {
    pub size: Option<SurfaceSize>,
    pub strokes: Vec<StrokedPath>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size: Some(size),
            strokes: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        let Some(size) = self.size else {
            return Err(ChartError::InvalidData(
                "frame has no configured surface size".to_owned(),
            ));
        };
        size.validate()?;

        for stroke in &self.strokes {
            stroke.path.validate()?;
            stroke.style.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.texts.is_empty()
    }

    /// Total number of `line_to` segments across all strokes.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.strokes
            .iter()
            .map(|stroke| {
                stroke
                    .path
                    .commands()
                    .iter()
                    .filter(|command| matches!(command, PathCommand::LineTo { .. }))
                    .count()
            })
            .sum()
    }
}
