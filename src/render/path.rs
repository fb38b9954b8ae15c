use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// One command of an open path in device pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
}

impl PathCommand {
    #[must_use]
    pub fn position(self) -> (f64, f64) {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => (x, y),
        }
    }
}

/// Path under construction, equivalent to a canvas `beginPath` followed by
/// `moveTo`/`lineTo` calls. Handed to `Surface::stroke_path` as a whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 16]>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a polyline at the first point and connects the remaining ones.
    #[must_use]
    pub fn polyline(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut path = Self::new();
        for (x, y) in points {
            path.line_to(x, y);
        }
        path
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::MoveTo { x, y });
        self
    }

    /// Adds a segment to `(x, y)`. On an empty path this starts a subpath,
    /// matching canvas semantics.
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        if self.commands.is_empty() {
            self.commands.push(PathCommand::MoveTo { x, y });
        } else {
            self.commands.push(PathCommand::LineTo { x, y });
        }
        self
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self
            .commands
            .iter()
            .any(|command| {
                let (x, y) = command.position();
                !x.is_finite() || !y.is_finite()
            })
        {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
