mod axis_renderer;
mod chart;
mod chart_config;
mod series_renderer;

pub use axis_renderer::render_axis;
pub use chart::{ChartLayout, LineChart, layout_chart, render_chart};
pub use chart_config::{ChartConfig, ChartStyle};
pub use series_renderer::{project_series, render_series};
