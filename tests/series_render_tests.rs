use indexmap::IndexMap;
use linechart_rs::ChartConfig;
use linechart_rs::api::render_series;
use linechart_rs::core::{Boundary, Dataset, Series, build_scale};
use linechart_rs::render::{Color, PathCommand, RecordingSurface, StrokeStyle, Surface};

fn two_series_dataset() -> Dataset {
    let mut colors = IndexMap::new();
    colors.insert("y0".to_owned(), Color::from_hex("#3DC23F").expect("y0 color"));
    colors.insert("y1".to_owned(), Color::from_hex("#F34C44").expect("y1 color"));
    Dataset::new(
        vec![
            Series::x("x", vec![1.0, 2.0, 3.0]),
            Series::line("y0", vec![37.0, 20.0, 32.0]),
            Series::line("y1", vec![22.0, 12.0, 30.0]),
        ],
        colors,
    )
    .expect("dataset")
}

#[test]
fn each_line_series_is_stroked_once_in_column_order() {
    let config = ChartConfig::default();
    let dataset = two_series_dataset();
    let scale = build_scale(Boundary { min: 12.0, max: 37.0 }, 3, &config.geometry)
        .expect("scale");

    let mut surface = RecordingSurface::new();
    surface
        .configure(config.geometry.surface_size().expect("size"))
        .expect("configure");
    let projected = render_series(&mut surface, &dataset, scale, &config).expect("render");

    assert_eq!(projected.len(), 2);
    let frame = surface.frame();
    assert_eq!(frame.strokes.len(), 2);
    assert_eq!(
        frame.strokes[0].style,
        StrokeStyle::new(4.0, Color::rgb8(0x3d, 0xc2, 0x3f))
    );
    assert_eq!(
        frame.strokes[1].style,
        StrokeStyle::new(4.0, Color::rgb8(0xf3, 0x4c, 0x44))
    );
    assert!(frame.texts.is_empty());
}

#[test]
fn polyline_connects_projected_points() {
    let config = ChartConfig::default();
    let dataset = two_series_dataset();
    let scale = build_scale(Boundary { min: 12.0, max: 37.0 }, 3, &config.geometry)
        .expect("scale");

    let mut surface = RecordingSurface::new();
    surface
        .configure(config.geometry.surface_size().expect("size"))
        .expect("configure");
    let projected = render_series(&mut surface, &dataset, scale, &config).expect("render");

    let commands = surface.frame().strokes[0].path.commands();
    assert_eq!(commands.len(), 3);
    assert!(matches!(commands[0], PathCommand::MoveTo { .. }));
    assert!(matches!(commands[1], PathCommand::LineTo { .. }));
    for (command, point) in commands.iter().zip(&projected[0].points) {
        assert_eq!(command.position(), (point.x, point.y));
    }
    assert_eq!(surface.frame().segment_count(), 4);
}

#[test]
fn series_stroke_width_comes_from_config() {
    let config = ChartConfig::default().with_series_stroke_width(1.5);
    let dataset = two_series_dataset();
    let scale = build_scale(Boundary { min: 12.0, max: 37.0 }, 3, &config.geometry)
        .expect("scale");

    let mut surface = RecordingSurface::new();
    surface
        .configure(config.geometry.surface_size().expect("size"))
        .expect("configure");
    render_series(&mut surface, &dataset, scale, &config).expect("render");

    assert!(
        surface
            .frame()
            .strokes
            .iter()
            .all(|stroke| stroke.style.width == 1.5)
    );
}
