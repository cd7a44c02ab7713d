use chart_options::api::{Axis, AxisTitleStyle, ChartDescription, OptionsComposer};
use chart_options::core::{SeriesEntry, StyleMap};
use chart_options::error::{OptionsError, OptionsResult};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const USAGE: &str = "usage: compose_chart_options --input <path> [--output <path>] [--pretty]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    pretty: bool,
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut pretty = false;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--pretty" => pretty = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let input = input.ok_or_else(|| format!("missing --input\n{USAGE}"))?;
    Ok(CliArgs {
        input,
        output,
        pretty,
    })
}

fn load_description(path: &Path) -> OptionsResult<ChartDescription> {
    let bytes = fs::read(path).map_err(|source| OptionsError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    ChartDescription::from_json_slice(&bytes)
}

/// Fixed presentation overrides for the goods-exports figure. The description
/// metadata is decoded and logged but not yet wired into these values.
fn compose_figure() -> OptionsComposer {
    let mut composer = OptionsComposer::new();

    let mut title_style = StyleMap::new();
    title_style.insert("left".to_owned(), Value::from("0px"));
    title_style.insert("right".to_owned(), Value::from("0px"));
    composer.set_axis_title_style(
        Axis::Y,
        AxisTitleStyle {
            align: "high".to_owned(),
            offset: 0,
            y: -4,
            rotation: 360,
            style: title_style,
        },
    );

    composer.set_series(vec![
        SeriesEntry::new(
            "EU",
            vec![
                61.2, 60.1, 60.7, 61.9, 59.6, 58.9, 58.0, 62.2, 57.6, 56.1, 54.8, 53.7, 53.6,
                50.0, 49.9, 49.7, 46.9,
            ],
        ),
        SeriesEntry::new(
            "Non-EU",
            vec![
                38.8, 39.9, 39.3, 38.1, 40.4, 41.1, 42.0, 37.8, 42.4, 43.9, 45.2, 46.3, 46.4,
                50.0, 50.1, 50.3, 53.1,
            ],
        ),
    ]);

    composer.set_chart_type("line");
    composer
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let description = load_description(&args.input).map_err(|e| e.to_string())?;
    debug!(
        source = %description.source,
        rows = description.data.len(),
        "loaded chart description"
    );

    let composer = compose_figure();
    let json = if args.pretty {
        composer.to_json_pretty()
    } else {
        composer.to_json()
    }
    .map_err(|e| e.to_string())?;

    match &args.output {
        Some(path) => fs::write(path, &json)
            .map_err(|e| format!("failed to write output {}: {e}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn main() {
    let _ = chart_options::telemetry::init_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
