//! linechart-rs: multi-series line chart rendering onto raster surfaces.
//!
//! The crate maps a tabular dataset (one x series plus one or more line
//! series) into device-pixel geometry, draws a labeled horizontal grid and
//! strokes one colored polyline per series through the `render::Surface`
//! trait.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, LineChart, render_chart};
pub use error::{ChartError, ChartResult};
