mod frame;
mod path;
mod primitives;
mod recording_surface;
mod surface;

pub use frame::{RenderFrame, StrokedPath};
pub use path::{Path, PathCommand};
pub use primitives::{Color, StrokeStyle, TextPrimitive, TextStyle};
pub use recording_surface::RecordingSurface;
pub use surface::{Surface, SurfaceSize};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoSurface};
