pub mod boundary;
pub mod dataset;
pub mod geometry;
pub mod grid;
pub mod line_series;
pub mod scale;
pub mod types;

pub use boundary::{Boundary, compute_boundaries};
pub use dataset::{Dataset, Series, SeriesKind};
pub use geometry::ViewportGeometry;
pub use grid::{GridLine, GridLines, grid_lines};
pub use line_series::{ProjectedSeries, to_pixel_coords};
pub use scale::{Scale, build_scale};
pub use types::{PixelPoint, Viewport};
