//! Hive Map Renderer
//!
//! Lay out a risk spreadsheet exported as JSON and write the hive map as SVG
//! and/or as a JSON layout for other front ends.
//!
//! ```text
//! hivemap <rows.json> [--width W] [--height H] [--config cfg.json]
//!         [--process NAME] [--nist STAGE] [--svg out.svg] [--json out.json]
//! ```
//!
//! With neither `--svg` nor `--json`, the SVG goes to stdout.

use std::path::PathBuf;
use std::{env, fs};

use hivemap_vis::{render_svg, FilterState, HiveConfig, HiveMap, Selection, ViewState};
use tracing_subscriber::prelude::*;

const USAGE: &str = "usage: hivemap <rows.json> [--width W] [--height H] [--config cfg.json] \
[--process NAME] [--nist STAGE] [--svg out.svg] [--json out.json]";

#[derive(Debug, Default, PartialEq)]
struct Args {
    rows: PathBuf,
    width: Option<f64>,
    height: Option<f64>,
    config: Option<PathBuf>,
    process: Option<String>,
    nist: Option<String>,
    svg: Option<PathBuf>,
    json: Option<PathBuf>,
}

impl Args {
    fn parse<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        let mut rows = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let mut value = || args.next().ok_or_else(|| format!("{arg} needs a value"));
            match arg.as_str() {
                "--width" => parsed.width = Some(parse_dimension(&arg, &value()?)?),
                "--height" => parsed.height = Some(parse_dimension(&arg, &value()?)?),
                "--config" => parsed.config = Some(value()?.into()),
                "--process" => parsed.process = Some(value()?),
                "--nist" => parsed.nist = Some(value()?),
                "--svg" => parsed.svg = Some(value()?.into()),
                "--json" => parsed.json = Some(value()?.into()),
                flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
                _ if rows.is_none() => rows = Some(PathBuf::from(&arg)),
                _ => return Err(format!("unexpected argument {arg}")),
            }
        }

        parsed.rows = rows.ok_or_else(|| "missing rows file".to_string())?;
        Ok(parsed)
    }

    fn filter(&self) -> FilterState {
        let select = |value: &Option<String>| value.as_deref().map_or(Selection::All, Selection::parse);
        FilterState::new(select(&self.process), select(&self.nist))
    }
}

fn parse_dimension(flag: &str, value: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|e| format!("{flag}: {e}"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hivemap=info,hivemap_vis=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = match Args::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&args) {
        tracing::error!(error = %e, "hive map failed");
        return Err(e);
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => HiveConfig::load(path)?,
        None => HiveConfig::default(),
    };

    let rows: serde_json::Value = serde_json::from_str(&fs::read_to_string(&args.rows)?)?;
    let hive = HiveMap::from_rows(&rows, &config)?;
    tracing::info!(
        risks = hive.len(),
        processes = hive.colors().len(),
        stages = hive.nist_stages().len(),
        "loaded {}",
        args.rows.display()
    );

    let width = args.width.unwrap_or(config.viewport_width);
    let height = args.height.unwrap_or(config.viewport_height);
    let view = ViewState::new(
        *hive.fitter(),
        hive.bounds(),
        width,
        height,
        (config.min_zoom, config.max_zoom),
    )?;
    let transform = view.transform();
    let filter = args.filter();

    if let Some(path) = &args.json {
        let export = hive.export(transform, &filter);
        fs::write(path, serde_json::to_string_pretty(&export)?)?;
        tracing::info!("wrote layout to {}", path.display());
    }

    let svg = render_svg(&hive, transform, &filter, width, height);
    match &args.svg {
        Some(path) => {
            fs::write(path, svg)?;
            tracing::info!("wrote svg to {}", path.display());
        }
        None if args.json.is_none() => print!("{svg}"),
        None => {}
    }

    Ok(())
}
