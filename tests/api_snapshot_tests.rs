use chrono::{TimeZone, Utc};
use mortality_chart::api::{
    ChartEngine, ChartEngineConfig, DisplayMode, ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot,
    PlotMargins,
};
use mortality_chart::core::{
    Color, Record, ScaleMode, SeriesCatalog, SeriesDescriptor, TimeSeriesStore, Viewport,
};
use mortality_chart::render::NullRenderer;

fn store() -> TimeSeriesStore {
    let catalog = SeriesCatalog::new(
        vec![
            SeriesDescriptor::new("total", Color::rgb8(255, 0, 0), "Total"),
            SeriesDescriptor::new("a", Color::rgb8(0, 128, 0), "A"),
            SeriesDescriptor::new("b", Color::rgb8(0, 0, 255), "B"),
        ],
        "total",
    )
    .expect("valid catalog");
    let records = (1..=3)
        .map(|m| {
            let timestamp = Utc
                .with_ymd_and_hms(2021, m, 1, 0, 0, 0)
                .single()
                .expect("valid date");
            Record::new(timestamp, vec![100.0 * f64::from(m), 10.0, 20.0])
        })
        .collect();
    TimeSeriesStore::new(catalog, records).expect("valid store")
}

#[test]
fn chart_engine_config_json_roundtrip() {
    let config = ChartEngineConfig::new(Viewport::new(1024, 768))
        .with_scale_mode(ScaleMode::Log2)
        .with_display_mode(DisplayMode::TopK)
        .with_top_k(3)
        .with_dimmed_opacity(0.25);

    let json = config
        .to_json_pretty()
        .expect("config should serialize to json");
    let restored = ChartEngineConfig::from_json_str(&json).expect("config should deserialize");

    assert_eq!(restored, config);
    assert!(json.contains("\"log-base-2\""));
    assert!(json.contains("\"top-k\""));
}

#[test]
fn config_json_fills_defaults_for_missing_fields() {
    let config = ChartEngineConfig::from_json_str(r#"{"viewport": {"width": 900, "height": 600}}"#)
        .expect("minimal config");

    assert_eq!(config, ChartEngineConfig::new(Viewport::new(900, 600)));
    assert_eq!(config.margins, PlotMargins::default());
    assert_eq!(config.top_k, 4);
    assert_eq!(config.dimmed_opacity, 0.1);
}

#[test]
fn config_validation_rejects_bad_values() {
    let viewport = Viewport::new(900, 600);

    assert!(ChartEngineConfig::new(viewport).with_top_k(0).validate().is_err());
    assert!(
        ChartEngineConfig::new(viewport)
            .with_dimmed_opacity(1.5)
            .validate()
            .is_err()
    );
    assert!(
        ChartEngineConfig::new(Viewport::new(100, 100))
            .validate()
            .is_err()
    );
    assert!(
        ChartEngineConfig::new(Viewport::new(100, 100))
            .with_margins(PlotMargins::zero())
            .validate()
            .is_ok()
    );
    assert!(
        ChartEngineConfig::from_json_str(
            r#"{"viewport": {"width": 900, "height": 600}, "margins": {"top": -1, "right": 0, "bottom": 0, "left": 0}}"#
        )
        .is_err()
    );
}

#[test]
fn snapshot_reports_focus_flags_and_domains() {
    let config = ChartEngineConfig::new(Viewport::new(800, 600)).with_scale_mode(ScaleMode::Log2);
    let mut engine =
        ChartEngine::new(NullRenderer::default(), config, store()).expect("engine init");
    engine.legend_click("b").expect("focus b");

    let snapshot = engine.snapshot();

    assert_eq!(snapshot.focused_series.as_deref(), Some("b"));
    let flags: Vec<(&str, bool)> = snapshot
        .visibility
        .iter()
        .map(|(key, flag)| (key.as_str(), *flag))
        .collect();
    assert_eq!(flags, vec![("total", false), ("a", false), ("b", true)]);
    assert_eq!(snapshot.scale_mode, ScaleMode::Log2);
    assert_eq!(snapshot.value_domain, (1.0, 300.0));
    assert_eq!(snapshot.record_count, 3);
    assert_eq!(snapshot.hovered_index, None);
    assert_eq!((snapshot.plot_area.width, snapshot.plot_area.height), (620.0, 375.0));
}

#[test]
fn snapshot_json_roundtrip() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(800, 600)),
        store(),
    )
    .expect("engine init");
    engine.pointer_move(0.0, 5.0).expect("pointer move");

    let json = engine
        .snapshot_json_pretty()
        .expect("snapshot should serialize");
    let restored: EngineSnapshot = serde_json::from_str(&json).expect("snapshot should parse");

    assert_eq!(restored, engine.snapshot());
    assert_eq!(restored.hovered_index, Some(0));
}

#[test]
fn snapshot_contract_v1_roundtrip_and_compat_parse() {
    let engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(800, 600)),
        store(),
    )
    .expect("engine init");
    let snapshot = engine.snapshot();

    let contract = snapshot
        .to_json_contract_v1_pretty()
        .expect("contract should serialize");
    assert!(contract.contains(&format!("\"schema_version\": {ENGINE_SNAPSHOT_JSON_SCHEMA_V1}")));

    let from_contract = EngineSnapshot::from_json_compat_str(&contract).expect("contract parse");
    let bare = serde_json::to_string(&snapshot).expect("bare json");
    let from_bare = EngineSnapshot::from_json_compat_str(&bare).expect("bare parse");

    assert_eq!(from_contract, snapshot);
    assert_eq!(from_bare, snapshot);
}

#[test]
fn snapshot_contract_rejects_unknown_schema_version() {
    let engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(800, 600)),
        store(),
    )
    .expect("engine init");
    let contract = engine
        .snapshot()
        .to_json_contract_v1_pretty()
        .expect("contract should serialize")
        .replace("\"schema_version\": 1", "\"schema_version\": 99");

    assert!(EngineSnapshot::from_json_compat_str(&contract).is_err());
}
