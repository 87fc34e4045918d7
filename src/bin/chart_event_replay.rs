use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use mortality_chart::api::{ChartEngine, ChartEngineConfig, ChartEvent, EngineSnapshot};
use mortality_chart::core::{
    ColumnMapping, IngestReport, RawRow, SeriesCatalog, Viewport, ingest_rows,
};
use mortality_chart::render::NullRenderer;
use serde::Serialize;

const USAGE: &str = "usage: chart_event_replay --data <csv> --events <json> --output <path> [--config <json>]";

#[derive(Debug)]
struct CliArgs {
    data: PathBuf,
    events: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ReplayStep {
    event: ChartEvent,
    request_count: usize,
    hovered_index: Option<usize>,
    focused_series: Option<String>,
    tooltip_title: Option<String>,
    tooltip_body: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ReplayReport {
    ingest: IngestReport,
    steps: Vec<ReplayStep>,
    final_snapshot: EngineSnapshot,
}

fn main() {
    let _ = mortality_chart::telemetry::init_default_tracing();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let rows = read_rows(&args.data)?;

    let catalog = SeriesCatalog::mortality().map_err(|err| err.to_string())?;
    let mapping = ColumnMapping::for_catalog(&catalog);
    let ingested = ingest_rows(catalog, &mapping, rows).map_err(|err| err.to_string())?;

    let config = match &args.config {
        Some(path) => {
            let raw = read_to_string(path)?;
            ChartEngineConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartEngineConfig::new(Viewport::new(1200, 800)),
    };

    let raw_events = read_to_string(&args.events)?;
    let events: Vec<ChartEvent> =
        serde_json::from_str(&raw_events).map_err(|err| format!("invalid events json: {err}"))?;

    let mut engine = ChartEngine::new(NullRenderer::default(), config, ingested.store)
        .map_err(|err| err.to_string())?;
    engine.render().map_err(|err| err.to_string())?;

    let mut steps = Vec::with_capacity(events.len());
    for event in events {
        engine
            .dispatch(&event)
            .map_err(|err| format!("event {event:?} failed: {err}"))?;
        steps.push(capture_step(&engine, event));
    }

    let report = ReplayReport {
        ingest: ingested.report,
        steps,
        final_snapshot: engine.snapshot(),
    };
    write_json(&args.output, &report)
}

fn capture_step(engine: &ChartEngine<NullRenderer>, event: ChartEvent) -> ReplayStep {
    let catalog = engine.store().catalog();
    let tooltip = engine.tooltip_content();
    ReplayStep {
        event,
        request_count: engine.renderer().last_request_count,
        hovered_index: engine.hovered_index(),
        focused_series: engine
            .focused_series()
            .map(|series| catalog.key(series).to_owned()),
        tooltip_title: tooltip.as_ref().map(|content| content.title.clone()),
        tooltip_body: tooltip
            .map(|content| {
                content
                    .body
                    .iter()
                    .map(|entry| format!("{} {}", entry.label, entry.formatted_value))
                    .collect()
            })
            .unwrap_or_default(),
    }
}

fn read_rows(path: &Path) -> Result<Vec<RawRow>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|err| format!("failed to open `{}`: {err}", path.display()))?;
    let headers = reader
        .headers()
        .map_err(|err| format!("failed to read csv headers: {err}"))?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| format!("malformed csv record: {err}"))?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| (header.to_owned(), cell.to_owned()))
            .collect::<IndexMap<_, _>>();
        rows.push(row);
    }
    Ok(rows)
}

fn read_to_string(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    let payload =
        serde_json::to_string_pretty(value).map_err(|err| format!("failed to encode json: {err}"))?;
    fs::write(path, payload).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut data = None::<PathBuf>;
    let mut events = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut config = None::<PathBuf>;

    while let Some(flag) = args.next() {
        let slot = match flag.as_str() {
            "--data" => &mut data,
            "--events" => &mut events,
            "--output" => &mut output,
            "--config" => &mut config,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        };
        let value = args
            .next()
            .ok_or_else(|| format!("missing value for {flag}"))?;
        *slot = Some(PathBuf::from(value));
    }

    Ok(CliArgs {
        data: data.ok_or_else(|| USAGE.to_owned())?,
        events: events.ok_or_else(|| USAGE.to_owned())?,
        output: output.ok_or_else(|| USAGE.to_owned())?,
        config,
    })
}
