#[cfg(feature = "cairo-backend")]
use std::fs::{self, File};
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_DATA_PATH: &str = "tests/fixtures/sample_chart_data.json";
#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_PATH: &str = "target/chart.png";

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    data_path: PathBuf,
    config_path: Option<PathBuf>,
    output_path: PathBuf,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    let _ = linechart_rs::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use linechart_rs::ChartConfig;
    use linechart_rs::api::LineChart;
    use linechart_rs::core::Dataset;
    use linechart_rs::render::CairoSurface;

    let args = parse_args()?;
    let raw = fs::read_to_string(&args.data_path).map_err(|err| {
        format!(
            "failed to read dataset `{}`: {err}",
            args.data_path.display()
        )
    })?;
    let dataset = Dataset::from_json_str(&raw).map_err(|err| err.to_string())?;

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            ChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartConfig::default(),
    };

    let mut chart = LineChart::new(CairoSurface::new(), config).map_err(|err| err.to_string())?;
    let layout = chart.render(&dataset).map_err(|err| err.to_string())?;

    if let Some(parent) = args.output_path.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            format!("failed to create output dir `{}`: {err}", parent.display())
        })?;
    }
    let mut file = File::create(&args.output_path).map_err(|err| {
        format!(
            "failed to create png `{}`: {err}",
            args.output_path.display()
        )
    })?;
    chart
        .surface()
        .write_png(&mut file)
        .map_err(|err| err.to_string())?;

    if let Some((first, last)) = dataset.x_time_span() {
        println!(
            "x range {} .. {}",
            first.format("%Y-%m-%d"),
            last.format("%Y-%m-%d")
        );
    }
    println!(
        "rendered {} series, values [{}, {}] -> {}",
        layout.series.len(),
        layout.boundary.min,
        layout.boundary.max,
        args.output_path.display()
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut data_path = PathBuf::from(DEFAULT_DATA_PATH);
    let mut config_path = None;
    let mut output_path = PathBuf::from(DEFAULT_OUTPUT_PATH);

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --data".to_owned())?;
                data_path = PathBuf::from(value);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = PathBuf::from(value);
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        data_path,
        config_path,
        output_path,
    })
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "Usage: cargo run --features cairo-backend --bin render_chart_png -- [options]\n\nOptions:\n  --data <path>     Columnar chart data json (default: {DEFAULT_DATA_PATH})\n  --config <path>   Chart config json (default: built-in defaults)\n  --output <path>   PNG output path (default: {DEFAULT_OUTPUT_PATH})\n  -h, --help        Show this message"
    )
}
