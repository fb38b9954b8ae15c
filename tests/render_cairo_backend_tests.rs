#![cfg(feature = "cairo-backend")]

use linechart_rs::api::LineChart;
use linechart_rs::core::Dataset;
use linechart_rs::render::{
    CairoSurface, Color, Path, StrokeStyle, Surface, SurfaceSize, TextStyle,
};
use linechart_rs::{ChartConfig, ChartError};

fn sample_dataset() -> Dataset {
    Dataset::from_json_str(include_str!("fixtures/sample_chart_data.json")).expect("sample")
}

#[test]
fn cairo_surface_rejects_drawing_before_configure() {
    let mut surface = CairoSurface::new();
    let mut path = Path::new();
    path.move_to(0.0, 0.0).line_to(10.0, 10.0);

    let err = surface
        .stroke_path(&path, StrokeStyle::new(1.0, Color::rgb(0.0, 0.0, 0.0)))
        .expect_err("unconfigured surface must fail");
    assert!(matches!(err, ChartError::Backend(_)));

    let err = surface
        .fill_text("0", 5.0, 5.0, &TextStyle::new("Sans", 12.0, Color::rgb(0.0, 0.0, 0.0)))
        .expect_err("unconfigured surface must fail");
    assert!(matches!(err, ChartError::Backend(_)));
}

#[test]
fn cairo_surface_rejects_invalid_size() {
    let mut surface = CairoSurface::new();
    let size = SurfaceSize {
        logical_width: 0.0,
        logical_height: 200.0,
        device: linechart_rs::core::Viewport::new(0, 400),
    };
    assert!(matches!(
        surface.configure(size),
        Err(ChartError::InvalidViewport { .. })
    ));
}

#[test]
fn cairo_surface_renders_sample_chart_at_device_size() {
    let mut chart =
        LineChart::new(CairoSurface::new(), ChartConfig::default()).expect("chart init");
    chart.render(&sample_dataset()).expect("render");

    let surface = chart.surface();
    let stats = surface.stats();
    assert_eq!(stats.paths_stroked, 3);
    assert_eq!(stats.texts_drawn, 5);

    let image = surface.image_surface().expect("configured image");
    assert_eq!((image.width(), image.height()), (1200, 400));
}

#[test]
fn cairo_surface_writes_png_bytes() {
    let mut chart =
        LineChart::new(CairoSurface::new(), ChartConfig::default()).expect("chart init");
    chart.render(&sample_dataset()).expect("render");

    let mut bytes = Vec::new();
    chart.surface().write_png(&mut bytes).expect("png");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
