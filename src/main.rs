use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;
use serde_json::Value;
use structured_logger::json::new_writer;
use structured_logger::Builder;

use place_display::config::{load_config, Config};
use place_display::errors::Result;
use place_display::HelperRegistry;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render OpenStreetMap place records as HTML summaries", long_about = None)]
struct Args {
    #[arg(help = "JSON file with a place record or a list of them")]
    places: PathBuf,

    #[arg(help = "JSON config file", short = 'c', long = "config")]
    config: Option<PathBuf>,

    #[arg(help = "zoom level to preselect in the zoom picker", short = 'z', long = "zoom")]
    zoom: Option<u32>,
}

fn setup_logging() {
    Builder::with_level("info")
        .with_target_writer("*", new_writer(io::stderr()))
        .init();
}

fn load_places(path: &Path) -> Result<Vec<Value>> {
    let file = File::open(path)?;
    let value: Value = serde_json::from_reader(BufReader::new(file))?;
    let places = match value {
        Value::Array(places) => places,
        place @ Value::Object(_) => vec![place],
        _ => return Err("Expected a place record or a list of place records".into()),
    };
    Ok(places)
}

/// Rows of the details summary, as (heading, helper) pairs.
const SUMMARY_ROWS: &[(&str, &str)] = &[
    ("Name", "formatLabel"),
    ("Type", "formatPlaceType"),
    ("Coverage", "coverageType"),
    ("OSM", "osmLink"),
    ("Details", "detailsPermaLink"),
    ("Wikipedia", "wikipediaLink"),
];

fn render_place(registry: &HelperRegistry, place: &Value, out: &mut impl Write) -> Result<()> {
    writeln!(out, "<table class=\"place\">")?;
    for (heading, helper) in SUMMARY_ROWS {
        let html = registry
            .call(helper, std::slice::from_ref(place))
            .map(|output| output.to_html())
            .unwrap_or_default();
        writeln!(out, "  <tr><th>{}</th><td>{}</td></tr>", heading, html)?;
    }
    writeln!(out, "</table>")?;

    if let Some(warning) = registry.call("tooManyHierarchyLinesWarning", std::slice::from_ref(place)) {
        if !warning.is_empty() {
            writeln!(out, "{}", warning.to_html())?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    setup_logging();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    let registry = HelperRegistry::new(config);

    let places = load_places(&args.places)?;
    info!(count = places.len(); "Rendering places");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for place in &places {
        render_place(&registry, place, &mut out)?;
    }

    let zoom = args.zoom.map_or(Value::Null, Value::from);
    if let Some(options) = registry.call("zoomLevels", &[zoom]) {
        writeln!(out, "<select name=\"zoom\">{}</select>", options.to_html())?;
    }
    Ok(())
}
