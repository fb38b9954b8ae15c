use indexmap::IndexMap;
use linechart_rs::api::{LineChart, layout_chart};
use linechart_rs::core::{Boundary, Dataset, Series, ViewportGeometry};
use linechart_rs::render::{Color, RecordingSurface};
use linechart_rs::{ChartConfig, ChartError, render_chart};

fn dataset(lines: Vec<(&str, Vec<f64>)>, x_len: usize) -> Dataset {
    let mut series = vec![Series::x("x", (0..x_len).map(|i| i as f64).collect())];
    let mut colors = IndexMap::new();
    for (name, values) in lines {
        colors.insert(name.to_owned(), Color::rgb(0.2, 0.4, 0.6));
        series.push(Series::line(name, values));
    }
    Dataset::new(series, colors).expect("valid dataset")
}

fn sample_dataset() -> Dataset {
    Dataset::from_json_str(include_str!("fixtures/sample_chart_data.json")).expect("sample")
}

#[test]
fn render_chart_sizes_surface_and_draws_axis_then_series() {
    let mut surface = RecordingSurface::new();
    let layout = render_chart(Some(&mut surface), &sample_dataset(), &ChartConfig::default())
        .expect("render");

    let frame = surface.frame();
    frame.validate().expect("valid frame");

    let size = frame.size.expect("configured size");
    assert_eq!((size.logical_width, size.logical_height), (600.0, 200.0));
    assert_eq!((size.device.width, size.device.height), (1200, 400));

    // grid path first, then one polyline per line series
    assert_eq!(frame.strokes.len(), 3);
    assert_eq!(frame.strokes[0].style.width, 1.0);
    assert_eq!(frame.strokes[1].path.len(), 112);
    assert_eq!(frame.strokes[2].path.len(), 112);
    assert_eq!(frame.texts.len(), 5);

    assert_eq!(layout.boundary, Boundary { min: 12.0, max: 278.0 });
    let labels: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, ["225", "172", "118", "65", "12"]);
}

#[test]
fn sample_series_stop_one_step_short_of_the_right_edge() {
    let mut surface = RecordingSurface::new();
    let layout = render_chart(Some(&mut surface), &sample_dataset(), &ChartConfig::default())
        .expect("render");

    let y0 = &layout.series[0];
    assert_eq!(y0.points.len(), 112);
    assert_eq!(y0.points[0].x, 0.0);
    assert_eq!(y0.points[111].x, 1178.0);
    assert_eq!(
        surface.frame().strokes[1].path.commands().last().map(|command| command.position().0),
        Some(1178.0)
    );
}

#[test]
fn layout_serializes_the_ratios_built_for_it() {
    let layout = layout_chart(&sample_dataset(), &ChartConfig::default()).expect("layout");
    let json = serde_json::to_value(&layout).expect("serialize layout");

    assert_eq!(json["scale"]["x_ratio"], serde_json::json!(1200.0 / 113.0));
    assert_eq!(json["scale"]["y_ratio"], serde_json::json!(320.0 / 266.0));
    assert_eq!(json["grid_lines"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["series"][0]["points"][111]["x"], serde_json::json!(1178.0));
}

#[test]
fn two_series_scenario_shares_one_boundary() {
    let data = dataset(
        vec![("y0", vec![37.0, 20.0, 32.0]), ("y1", vec![22.0, 12.0, 30.0])],
        3,
    );
    let config = ChartConfig::default();
    let mut surface = RecordingSurface::new();
    let layout = render_chart(Some(&mut surface), &data, &config).expect("render");

    assert_eq!(layout.boundary, Boundary { min: 12.0, max: 37.0 });
    let y0 = &layout.series[0];
    let expected_top = (400.0 - 40.0 - 37.0 * layout.scale.y_ratio()).floor();
    assert_eq!(y0.points[0].y, expected_top);
    assert!(y0.points[0].y < y0.points[1].y);
    assert_eq!(layout.series[1].name, "y1");
}

#[test]
fn flat_data_fails_before_touching_surface() {
    let data = dataset(vec![("y0", vec![10.0, 10.0, 10.0])], 3);
    let mut surface = RecordingSurface::new();

    let err = render_chart(Some(&mut surface), &data, &ChartConfig::default())
        .expect_err("flat range must fail");
    assert!(matches!(err, ChartError::FlatRange { value } if value == 10.0));
    assert!(surface.frame().size.is_none());
    assert!(surface.frame().is_empty());
}

#[test]
fn x_only_dataset_reports_degenerate_boundary() {
    let data = dataset(Vec::new(), 3);
    let mut surface = RecordingSurface::new();

    let err = render_chart(Some(&mut surface), &data, &ChartConfig::default())
        .expect_err("no line series must fail");
    assert!(matches!(err, ChartError::DegenerateBoundary));
    assert!(surface.frame().is_empty());
}

#[test]
fn missing_surface_is_a_configuration_error() {
    let err = render_chart::<RecordingSurface>(None, &sample_dataset(), &ChartConfig::default())
        .expect_err("missing surface must fail");
    assert!(matches!(err, ChartError::MissingSurface));
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let config = ChartConfig::new(ViewportGeometry::new(600.0, 200.0).with_padding(500.0));
    let mut surface = RecordingSurface::new();
    let err = render_chart(Some(&mut surface), &sample_dataset(), &config)
        .expect_err("padding larger than the surface must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = LineChart::new(RecordingSurface::new(), config).err().expect("init fails");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn rendering_twice_on_fresh_surfaces_is_identical() {
    let data = sample_dataset();
    let config = ChartConfig::default();

    let mut first = LineChart::new(RecordingSurface::new(), config.clone()).expect("first chart");
    let mut second = LineChart::new(RecordingSurface::new(), config).expect("second chart");
    let first_layout = first.render(&data).expect("first render");
    let second_layout = second.render(&data).expect("second render");

    assert_eq!(first_layout, second_layout);
    assert_eq!(first.surface().frame(), second.surface().frame());
}

#[test]
fn re_rendering_replaces_previous_frame() {
    let data = sample_dataset();
    let mut chart = LineChart::new(RecordingSurface::new(), ChartConfig::default()).expect("chart");

    chart.render(&data).expect("first render");
    chart.render(&data).expect("second render");

    let frame = chart.into_surface().into_frame();
    assert_eq!(frame.strokes.len(), 3);
    assert_eq!(frame.texts.len(), 5);
}

#[test]
fn layout_matches_rendered_geometry() {
    let data = sample_dataset();
    let config = ChartConfig::default();

    let layout = layout_chart(&data, &config).expect("layout");
    let mut chart = LineChart::new(RecordingSurface::new(), config).expect("chart");
    let rendered = chart.render(&data).expect("render");
    assert_eq!(chart.layout(&data).expect("chart layout"), layout);
    assert_eq!(rendered, layout);
}

#[test]
fn smaller_viewport_scales_geometry_down() {
    let config = ChartConfig::new(
        ViewportGeometry::new(300.0, 100.0)
            .with_pixel_ratio(1.0)
            .with_padding(10.0),
    );
    let mut surface = RecordingSurface::new();
    let layout = render_chart(Some(&mut surface), &sample_dataset(), &config).expect("render");

    let size = surface.frame().size.expect("size");
    assert_eq!((size.device.width, size.device.height), (300, 100));
    let grid_ys: Vec<f64> = layout.grid_lines.iter().map(|line| line.y).collect();
    assert_eq!(grid_ys, vec![26.0, 42.0, 58.0, 74.0, 90.0]);
    assert!(
        layout
            .series
            .iter()
            .flat_map(|series| &series.points)
            .all(|point| point.x >= 0.0 && point.x < 300.0)
    );
}
