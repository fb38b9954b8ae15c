use chrono::{DateTime, Utc};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Role of a series inside a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    /// Plotted as a polyline.
    Line,
    /// Shared ordinal axis for every line series.
    X,
}

/// Named value sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub kind: SeriesKind,
    pub values: Vec<f64>,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: SeriesKind, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            kind,
            values,
        }
    }

    #[must_use]
    pub fn line(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self::new(name, SeriesKind::Line, values)
    }

    #[must_use]
    pub fn x(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self::new(name, SeriesKind::X, values)
    }

    #[must_use]
    pub fn is_line(&self) -> bool {
        self.kind == SeriesKind::Line
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Validated chart input: one x series, any number of colored line series.
///
/// Construction enforces the invariants the renderers rely on, so a
/// `Dataset` value is always drawable once its range is non-flat.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    series: Vec<Series>,
    colors: IndexMap<String, Color>,
    names: IndexMap<String, String>,
    x_index: usize,
}

impl Dataset {
    pub fn new(series: Vec<Series>, colors: IndexMap<String, Color>) -> ChartResult<Self> {
        let mut seen = IndexSet::with_capacity(series.len());
        for item in &series {
            if item.name.trim().is_empty() {
                return Err(ChartError::InvalidData(
                    "series name must not be empty".to_owned(),
                ));
            }
            if !seen.insert(item.name.as_str()) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate series name `{}`",
                    item.name
                )));
            }
        }

        let mut x_positions = series
            .iter()
            .enumerate()
            .filter(|(_, item)| item.kind == SeriesKind::X)
            .map(|(index, _)| index);
        let x_index = match (x_positions.next(), x_positions.next()) {
            (Some(index), None) => index,
            (None, _) => {
                return Err(ChartError::InvalidData(
                    "dataset must contain an `x` series".to_owned(),
                ));
            }
            (Some(_), Some(_)) => {
                return Err(ChartError::InvalidData(
                    "dataset must contain exactly one `x` series".to_owned(),
                ));
            }
        };

        let x_len = series[x_index].len();
        for item in &series {
            if item.values.iter().any(|value| !value.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` contains non-finite values",
                    item.name
                )));
            }
            if !item.is_line() {
                continue;
            }
            if item.len() != x_len {
                return Err(ChartError::InvalidData(format!(
                    "line series `{}` has {} values but the x series has {x_len}",
                    item.name,
                    item.len()
                )));
            }
            match colors.get(&item.name) {
                Some(color) => color.validate()?,
                None => {
                    return Err(ChartError::MissingColor {
                        series: item.name.clone(),
                    });
                }
            }
        }

        Ok(Self {
            series,
            colors,
            names: IndexMap::new(),
            x_index,
        })
    }

    /// Attaches human-readable series labels (e.g. for legends and logs).
    #[must_use]
    pub fn with_display_names(mut self, names: IndexMap<String, String>) -> Self {
        self.names = names;
        self
    }

    /// Parses the columnar JSON form:
    /// `{ "columns": [["x", ...], ["y0", ...]], "types": {...}, "colors": {...}, "names": {...} }`
    /// where the first entry of every column is the series name.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let parsed = parse_columnar_json(input);
        if let Err(err) = &parsed {
            warn!(error = %err, "rejected chart dataset json");
        }
        parsed
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Line series in column order.
    pub fn line_series(&self) -> impl Iterator<Item = &Series> {
        self.series.iter().filter(|item| item.is_line())
    }

    #[must_use]
    pub fn x_series(&self) -> &Series {
        &self.series[self.x_index]
    }

    #[must_use]
    pub fn color(&self, series_name: &str) -> Option<Color> {
        self.colors.get(series_name).copied()
    }

    #[must_use]
    pub fn colors(&self) -> &IndexMap<String, Color> {
        &self.colors
    }

    /// Display label for a series, falling back to its name.
    #[must_use]
    pub fn display_name<'a>(&'a self, series_name: &'a str) -> &'a str {
        self.names
            .get(series_name)
            .map_or(series_name, String::as_str)
    }

    /// First and last x values read as Unix epoch milliseconds.
    #[must_use]
    pub fn x_time_span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let values = &self.x_series().values;
        let to_time = |value: f64| DateTime::<Utc>::from_timestamp_millis(value as i64);
        Some((to_time(*values.first()?)?, to_time(*values.last()?)?))
    }
}

#[derive(Debug, Deserialize)]
struct ColumnarChartData {
    columns: Vec<Vec<Value>>,
    types: IndexMap<String, SeriesKind>,
    #[serde(default)]
    colors: IndexMap<String, Color>,
    #[serde(default)]
    names: IndexMap<String, String>,
}

fn parse_columnar_json(input: &str) -> ChartResult<Dataset> {
    let raw: ColumnarChartData = serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse chart data json: {e}")))?;

    let mut series = Vec::with_capacity(raw.columns.len());
    for (position, column) in raw.columns.into_iter().enumerate() {
        let mut cells = column.into_iter();
        let name = match cells.next() {
            Some(Value::String(name)) => name,
            Some(other) => {
                return Err(ChartError::InvalidData(format!(
                    "column {position} must start with a series name, found `{other}`"
                )));
            }
            None => {
                return Err(ChartError::InvalidData(format!(
                    "column {position} is empty"
                )));
            }
        };
        let kind = *raw.types.get(&name).ok_or_else(|| {
            ChartError::InvalidData(format!("series `{name}` has no entry in `types`"))
        })?;
        let values = cells
            .map(|cell| {
                cell.as_f64().ok_or_else(|| {
                    ChartError::InvalidData(format!(
                        "series `{name}` contains non-numeric value `{cell}`"
                    ))
                })
            })
            .collect::<ChartResult<Vec<f64>>>()?;
        series.push(Series::new(name, kind, values));
    }

    Ok(Dataset::new(series, raw.colors)?.with_display_names(raw.names))
}
